//! [`Command`] for creating a new [`Booking`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        booking::{self, ValidationError},
        Booking,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for validating a [`booking::Draft`] and persisting it as a new
/// [`Booking`].
///
/// Existence of the referenced [`Hotel`] and [`Room`] is not checked here.
///
/// [`Hotel`]: crate::domain::Hotel
/// [`Room`]: crate::domain::Room
#[derive(Clone, Debug)]
pub struct CreateBooking {
    /// [`booking::Draft`] of a new [`Booking`].
    pub draft: booking::Draft,
}

impl<Db> Command<CreateBooking> for Service<Db>
where
    Db: Database<Insert<Booking>, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking { draft } = cmd;

        let booking = draft
            .into_booking(booking::Id::new(), DateTime::now().coerce())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        self.database()
            .execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`booking::Draft`] is not valid.
    #[display("Invalid `Booking`: {_0}")]
    #[from]
    Validation(ValidationError),
}
