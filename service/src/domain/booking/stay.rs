//! [`Stay`] pricing.

use std::time::Duration;

use common::{DateTime, Money};
use derive_more::{Display, Error};

#[cfg(doc)]
use crate::domain::Room;

use super::{CheckInDateTime, CheckOutDateTime, Field, Nights};

/// Length of a single night.
const NIGHT: Duration = Duration::from_secs(24 * 60 * 60);

/// Priced range of nights spent in a [`Room`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stay {
    /// [`CheckInDateTime`] of this [`Stay`].
    pub check_in_at: CheckInDateTime,

    /// [`CheckOutDateTime`] of this [`Stay`].
    pub check_out_at: CheckOutDateTime,

    /// Number of [`Nights`] in this [`Stay`].
    pub nights: Nights,

    /// Price of all the [`Nights`] in this [`Stay`].
    pub total_price: Money,
}

impl Stay {
    /// Parses the provided `check_in` and `check_out` dates and prices the
    /// [`Stay`] between them by the provided nightly `price`.
    ///
    /// # Errors
    ///
    /// - [`StayError::InvalidDate`] if any of the dates cannot be parsed.
    /// - [`StayError::InvalidDateRange`] if the check-out isn't strictly
    ///   after the check-in.
    pub fn compute(
        check_in: &str,
        check_out: &str,
        price: Money,
    ) -> Result<Self, StayError> {
        let check_in_at = DateTime::parse(check_in)
            .map_err(|_| StayError::InvalidDate(Field::CheckInDate))?;
        let check_out_at = DateTime::parse(check_out)
            .map_err(|_| StayError::InvalidDate(Field::CheckOutDate))?;

        Self::new(check_in_at.coerce(), check_out_at.coerce(), price)
    }

    /// Prices the [`Stay`] between the provided dates by the provided nightly
    /// `price`.
    ///
    /// A partial day counts as a whole night.
    ///
    /// # Errors
    ///
    /// With [`StayError::InvalidDateRange`] if the check-out isn't strictly
    /// after the check-in, or the [`Stay`] is too long to be priced.
    pub fn new(
        check_in_at: CheckInDateTime,
        check_out_at: CheckOutDateTime,
        price: Money,
    ) -> Result<Self, StayError> {
        let duration = check_out_at
            .coerce::<()>()
            .duration_since(check_in_at.coerce())
            .filter(|d| !d.is_zero())
            .ok_or(StayError::InvalidDateRange)?;
        let nights =
            Nights::try_from(duration.as_nanos().div_ceil(NIGHT.as_nanos()))
                .map_err(|_| StayError::InvalidDateRange)?;
        let total_price = price
            .checked_mul(nights)
            .ok_or(StayError::InvalidDateRange)?;

        Ok(Self {
            check_in_at,
            check_out_at,
            nights,
            total_price,
        })
    }
}

/// Error of pricing a [`Stay`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum StayError {
    /// Date cannot be parsed.
    #[display("`{_0}` is not a valid date")]
    InvalidDate(#[error(not(source))] Field),

    /// Check-out date is not after the check-in date.
    #[display("Check-out date must be after check-in date")]
    InvalidDateRange,
}
