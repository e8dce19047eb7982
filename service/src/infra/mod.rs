//! Infrastructure layer.

pub mod database;

pub use self::database::Database;
#[cfg(feature = "memory")]
pub use self::database::Memory;
#[cfg(feature = "postgres")]
pub use self::database::{postgres, Postgres};
