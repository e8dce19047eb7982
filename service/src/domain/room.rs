//! [`Room`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{hotel, Hotel};

/// Bookable room of a [`Hotel`], priced per night.
#[derive(Clone, Debug)]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// ID of the [`Hotel`] this [`Room`] belongs to.
    pub hotel_id: hotel::Id,

    /// [`Category`] of this [`Room`].
    pub category: Category,

    /// Price of a single night in this [`Room`].
    pub price: Money,

    /// Maximum number of guests this [`Room`] accommodates.
    pub capacity: Capacity,

    /// [`hotel::Amenity`]s provided by this [`Room`].
    pub amenities: Vec<hotel::Amenity>,

    /// [`hotel::ImageUrl`]s illustrating this [`Room`].
    pub images: Vec<hotel::ImageUrl>,

    /// Indicator whether this [`Room`] is offered for booking.
    pub is_available: bool,

    /// [`Description`] of this [`Room`].
    pub description: Description,

    /// [`DateTime`] when this [`Room`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Room`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_text! {
    #[doc = "Type label of a [`Room`], like `Deluxe King Room`."]
    struct Category(max_len = 256);
}

define_text! {
    #[doc = "Description of a [`Room`]."]
    struct Description(max_len = 4096);
}

/// Maximum number of guests in a [`Room`].
pub type Capacity = u16;

/// [`DateTime`] when a [`Room`] was created.
pub type CreationDateTime = DateTimeOf<(Room, unit::Creation)>;
