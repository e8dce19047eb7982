//! [`Query`] collection related to the multiple [`Booking`]s.

use common::operations::By;

use crate::{domain::Booking, read};
#[cfg(doc)]
use crate::{
    domain::{Hotel, Room},
    Query,
};

use super::DatabaseQuery;

/// Queries all the [`Booking`]s, the most recent first.
pub type All = DatabaseQuery<By<Vec<Booking>, ()>>;

/// Queries all the [`Booking`]s along with their [`Hotel`]s and [`Room`]s,
/// the most recent first.
pub type Detailed = DatabaseQuery<By<Vec<read::booking::Detailed>, ()>>;
