//! [`Booking`]-related read definitions.

use crate::domain::{Booking, Hotel, Room};

/// [`Booking`] along with the booked [`Hotel`] and [`Room`].
#[derive(Clone, Debug)]
pub struct Detailed {
    /// [`Booking`] itself.
    pub booking: Booking,

    /// [`Hotel`] of the [`Booking`].
    pub hotel: Hotel,

    /// [`Room`] of the [`Booking`].
    pub room: Room,
}
