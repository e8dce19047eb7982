//! [`Query`] collection related to the multiple [`Hotel`]s.

use common::operations::By;

use crate::domain::Hotel;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries all the [`Hotel`]s ordered by their names.
pub type All = DatabaseQuery<By<Vec<Hotel>, ()>>;
