//! [`Command`] for submitting a [`Booking`] of a [`Room`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        booking::{self, draft::CustomerDraft, Field, Stay, StayError},
        hotel, room, Booking, Hotel, Room,
    },
    infra::{database, Database},
    Service,
};

use super::{create_booking, Command, CreateBooking};

/// [`Command`] for booking a [`Room`] of a [`Hotel`] for a range of nights.
///
/// Nights and total price of the [`Booking`] are always computed from the
/// [`Room`] price, never accepted from the caller.
#[derive(Clone, Debug, Default)]
pub struct SubmitBooking {
    /// ID of the [`Hotel`] the [`Room`] belongs to.
    pub hotel_id: Option<hotel::Id>,

    /// ID of the [`Room`] to book.
    pub room_id: Option<room::Id>,

    /// Check-in date, either `YYYY-MM-DD` or an RFC 3339 date and time.
    pub check_in: Option<String>,

    /// Check-out date, either `YYYY-MM-DD` or an RFC 3339 date and time.
    pub check_out: Option<String>,

    /// Number of guests staying in the [`Room`].
    pub guests: Option<booking::Guests>,

    /// Details of the customer making the [`Booking`].
    pub customer: CustomerDraft,
}

impl<Db> Command<SubmitBooking> for Service<Db>
where
    Db: Database<
            Select<By<Option<Room>, room::Id>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Hotel>, hotel::Id>>,
            Ok = Option<Hotel>,
            Err = Traced<database::Error>,
        >,
    Self: Command<
        CreateBooking,
        Ok = Booking,
        Err = Traced<create_booking::ExecutionError>,
    >,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    #[tracing::instrument(skip_all, fields(room_id, hotel_id))]
    async fn execute(&self, cmd: SubmitBooking) -> Result<Self::Ok, Self::Err> {
        use booking::ValidationError as V;
        use ExecutionError as E;

        let SubmitBooking {
            hotel_id,
            room_id,
            check_in,
            check_out,
            guests,
            customer,
        } = cmd;

        let hotel_id = hotel_id
            .ok_or(V::Missing(Field::HotelId))
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let room_id = room_id
            .ok_or(V::Missing(Field::RoomId))
            .map_err(tracerr::from_and_wrap!(=> E))?;
        _ = tracing::Span::current()
            .record("room_id", tracing::field::display(room_id))
            .record("hotel_id", tracing::field::display(hotel_id));

        let room = self
            .database()
            .execute(Select(By::<Option<Room>, _>::new(room_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RoomNotExists(room_id))
            .map_err(tracerr::wrap!())?;
        if room.hotel_id != hotel_id {
            return Err(tracerr::new!(E::HotelNotExists(hotel_id)));
        }
        let hotel = self
            .database()
            .execute(Select(By::<Option<Hotel>, _>::new(room.hotel_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::HotelNotExists(hotel_id))
            .map_err(tracerr::wrap!())?;

        let check_in = non_blank(check_in)
            .ok_or(V::Missing(Field::CheckInDate))
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let check_out = non_blank(check_out)
            .ok_or(V::Missing(Field::CheckOutDate))
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let Stay {
            check_in_at,
            check_out_at,
            nights,
            total_price,
        } = Stay::compute(&check_in, &check_out, room.price)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        if guests.is_some_and(|g| g > room.capacity) {
            return Err(tracerr::new!(E::Validation(V::Invalid(Field::Guests))));
        }

        let booking = self
            .execute(CreateBooking {
                draft: booking::Draft {
                    hotel_id: Some(hotel.id),
                    room_id: Some(room.id),
                    customer,
                    check_in_at: Some(check_in_at),
                    check_out_at: Some(check_out_at),
                    guests,
                    nights: Some(nights),
                    total_price: Some(total_price),
                    payment_method: self.config().payment_method.clone(),
                    status: booking::Status::Confirmed,
                },
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tracing::info!(booking_id = %booking.id, "`Booking` created");

        Ok(booking)
    }
}

/// Trims the provided `value`, discarding it if it's blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Error of [`SubmitBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Hotel`] with the provided ID does not exist, or doesn't own the
    /// requested [`Room`].
    #[display("`Hotel(id: {_0})` does not exist")]
    HotelNotExists(#[error(not(source))] hotel::Id),

    /// [`Room`] with the provided ID does not exist.
    #[display("`Room(id: {_0})` does not exist")]
    RoomNotExists(#[error(not(source))] room::Id),

    /// [`Stay`] cannot be computed.
    #[display("Invalid stay: {_0}")]
    #[from]
    Stay(StayError),

    /// Request is not valid.
    #[display("Invalid `Booking`: {_0}")]
    #[from]
    Validation(booking::ValidationError),
}

impl From<create_booking::ExecutionError> for ExecutionError {
    fn from(e: create_booking::ExecutionError) -> Self {
        use create_booking::ExecutionError as E;

        match e {
            E::Db(e) => Self::Db(e),
            E::Validation(e) => Self::Validation(e),
        }
    }
}
