//! [`Booking`] definitions.

pub mod customer;
pub mod draft;
pub mod stay;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::{Hotel, Room};
use crate::domain::{hotel, room};

pub use self::{
    customer::Customer,
    draft::{Draft, Field, ValidationError},
    stay::{Stay, StayError},
};

/// Reservation of a single [`Room`] for a contiguous range of nights.
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the booked [`Hotel`].
    pub hotel_id: hotel::Id,

    /// ID of the booked [`Room`].
    pub room_id: room::Id,

    /// [`Customer`] who made this [`Booking`].
    pub customer: Customer,

    /// [`DateTime`] when the stay starts.
    pub check_in_at: CheckInDateTime,

    /// [`DateTime`] when the stay ends.
    pub check_out_at: CheckOutDateTime,

    /// Number of guests staying in the [`Room`].
    pub guests: Guests,

    /// Number of nights of the stay.
    pub nights: Nights,

    /// Price of all the [`Nights`] of the stay.
    pub total_price: Money,

    /// [`PaymentMethod`] of this [`Booking`].
    pub payment_method: PaymentMethod,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`Booking`].
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
    #[doc = "Label of the way a [`Booking`] is paid."]
    struct PaymentMethod(max_len = 256);
}

impl PaymentMethod {
    /// Label of a [`Booking`] paid in cash on arrival.
    pub const CASH_ON_DELIVERY: &'static str = "Cash on Delivery";
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self(Self::CASH_ON_DELIVERY.to_owned())
    }
}

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "[`Booking`] awaits a confirmation."]
        Pending = 1,

        #[doc = "[`Booking`] is confirmed."]
        Confirmed = 2,

        #[doc = "[`Booking`] is cancelled."]
        Cancelled = 3,
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Confirmed
    }
}

/// Number of guests in a [`Booking`].
pub type Guests = u16;

/// Number of nights in a [`Booking`].
pub type Nights = u32;

/// [`DateTime`] when a [`Booking`] stay starts.
pub type CheckInDateTime = DateTimeOf<(Booking, unit::CheckIn)>;

/// [`DateTime`] when a [`Booking`] stay ends.
pub type CheckOutDateTime = DateTimeOf<(Booking, unit::CheckOut)>;

/// [`DateTime`] when a [`Booking`] was created.
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;
