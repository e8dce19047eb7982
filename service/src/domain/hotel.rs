//! [`Hotel`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hotel offering [`Room`]s to book.
///
/// [`Room`]: crate::domain::Room
#[derive(Clone, Debug)]
pub struct Hotel {
    /// ID of this [`Hotel`].
    pub id: Id,

    /// [`Name`] of this [`Hotel`].
    pub name: Name,

    /// [`Location`] of this [`Hotel`].
    pub location: Location,

    /// [`Description`] of this [`Hotel`].
    pub description: Description,

    /// [`ImageUrl`] of this [`Hotel`].
    pub image: ImageUrl,

    /// [`Rating`] of this [`Hotel`].
    pub rating: Rating,

    /// [`Amenity`]s provided by this [`Hotel`].
    pub amenities: Vec<Amenity>,

    /// [`PriceRange`] of this [`Hotel`].
    pub price_range: PriceRange,

    /// [`DateTime`] when this [`Hotel`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Hotel`].
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
    #[doc = "Name of a [`Hotel`]."]
    struct Name(max_len = 256);
}

define_text! {
    #[doc = "Human-readable location of a [`Hotel`], like `Miami, USA`."]
    struct Location(max_len = 512);
}

define_text! {
    #[doc = "Description of a [`Hotel`]."]
    struct Description(max_len = 4096);
}

define_text! {
    #[doc = "URL of an image illustrating a [`Hotel`] or its room."]
    struct ImageUrl(max_len = 2048);
}

define_text! {
    #[doc = "Amenity provided by a [`Hotel`] or its room, like `Free WiFi`."]
    struct Amenity(max_len = 256);
}

define_text! {
    #[doc = "Human-readable price range of a [`Hotel`], like `$200 - $500`."]
    struct PriceRange(max_len = 64);
}

/// Rating of a [`Hotel`] in the `0..=5` range.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Rating(Decimal);

impl Rating {
    /// Maximum possible [`Rating`].
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Creates a new [`Rating`] if the given `rating` is in the `0..=5` range.
    #[must_use]
    pub fn new(rating: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Self::MAX)
            .contains(&rating)
            .then_some(Self(rating))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Decimal::from_parts(45, 0, 0, false, 1))
    }
}

/// [`DateTime`] when a [`Hotel`] was created.
pub type CreationDateTime = DateTimeOf<(Hotel, unit::Creation)>;

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{Amenity, Name, Rating};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn rating_defaults_to_four_and_a_half() {
        assert_eq!(Decimal::from(Rating::default()), decimal("4.5"));
    }

    #[test]
    fn rating_range() {
        assert!(Rating::new(decimal("0")).is_some());
        assert!(Rating::new(decimal("4.8")).is_some());
        assert!(Rating::new(decimal("5")).is_some());

        assert!(Rating::new(decimal("-0.1")).is_none());
        assert!(Rating::new(decimal("5.01")).is_none());
    }

    #[test]
    fn text_must_be_trimmed_and_non_empty() {
        assert!(Name::new("The Grand Palace Hotel").is_some());
        assert!(Amenity::new("Spa").is_some());

        assert!(Name::new("").is_none());
        assert!(Name::new("   ").is_none());
        assert!(Name::new(" Seaside Resort").is_none());
        assert!(Amenity::new("a".repeat(257)).is_none());
    }
}
