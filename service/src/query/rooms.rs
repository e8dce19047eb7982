//! [`Query`] collection related to the multiple [`Room`]s.

use common::operations::By;

use crate::domain::{hotel, Room};
#[cfg(doc)]
use crate::{domain::Hotel, Query};

use super::DatabaseQuery;

/// Queries all the [`Room`]s of a [`Hotel`] ordered by their price.
pub type ByHotel = DatabaseQuery<By<Vec<Room>, hotel::Id>>;
