//! [`Booking`]-related definitions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Extension, Json,
};
use common::Handler as _;
use rust_decimal::Decimal;
use serde::{de::IgnoredAny, Deserialize, Serialize};
use service::{
    command::{self, submit_booking},
    domain::{
        self,
        booking::{
            draft::CustomerDraft, Field, Guests, StayError, ValidationError,
        },
    },
    query, read,
};
use uuid::Uuid;

use crate::{
    api::{hotel::HotelError, room::RoomError, Hotel, Room},
    define_error, AsError, Error, Service,
};

/// Request to book a room.
///
/// Every field is optional, so an absent one is reported as a validation
/// error naming it. Unknown fields (like `totalPrice`) are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// ID of the hotel the room belongs to.
    pub hotel_id: Option<String>,

    /// ID of the room to book.
    pub room_id: Option<String>,

    /// Check-in date, either `YYYY-MM-DD` or an RFC 3339 date and time.
    pub check_in_date: Option<String>,

    /// Check-out date, either `YYYY-MM-DD` or an RFC 3339 date and time.
    pub check_out_date: Option<String>,

    /// Number of guests.
    pub guests: Option<GuestsRequest>,

    /// Details of the customer making the booking.
    pub customer_details: Option<CustomerDetailsRequest>,
}

/// Number of guests of a [`BookingRequest`].
///
/// Accepts any JSON value, so a non-integer one is reported as an invalid
/// `guests` rather than a malformed request body.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub enum GuestsRequest {
    /// Integer number of guests.
    Number(i64),

    /// Any other JSON value.
    Malformed(IgnoredAny),
}

impl TryFrom<GuestsRequest> for Guests {
    type Error = ValidationError;

    fn try_from(guests: GuestsRequest) -> Result<Self, Self::Error> {
        match guests {
            GuestsRequest::Number(n) => Self::try_from(n)
                .map_err(|_| ValidationError::Invalid(Field::Guests)),
            GuestsRequest::Malformed(_) => {
                Err(ValidationError::Invalid(Field::Guests))
            }
        }
    }
}

/// Customer details of a [`BookingRequest`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailsRequest {
    /// Full name of the customer.
    pub full_name: Option<String>,

    /// Email of the customer.
    pub email: Option<String>,

    /// Phone of the customer.
    pub phone: Option<String>,

    /// Postal address of the customer.
    pub address: Option<String>,

    /// City of the customer.
    pub city: Option<String>,

    /// Country of the customer.
    pub country: Option<String>,

    /// Special requests of the customer, if any.
    pub special_requests: Option<String>,
}

impl TryFrom<BookingRequest> for command::SubmitBooking {
    type Error = ValidationError;

    fn try_from(req: BookingRequest) -> Result<Self, Self::Error> {
        let BookingRequest {
            hotel_id,
            room_id,
            check_in_date,
            check_out_date,
            guests,
            customer_details,
        } = req;
        let CustomerDetailsRequest {
            full_name,
            email,
            phone,
            address,
            city,
            country,
            special_requests,
        } = customer_details.unwrap_or_default();

        Ok(Self {
            hotel_id: parse_id(hotel_id, Field::HotelId)?,
            room_id: parse_id(room_id, Field::RoomId)?,
            check_in: check_in_date,
            check_out: check_out_date,
            guests: guests.map(Guests::try_from).transpose()?,
            customer: CustomerDraft {
                full_name,
                email,
                phone,
                address,
                city,
                country,
                special_requests,
            },
        })
    }
}

/// Parses an optional ID of the provided [`Field`].
///
/// Blank IDs are treated as absent.
fn parse_id<Id: From<Uuid>>(
    id: Option<String>,
    field: Field,
) -> Result<Option<Id>, ValidationError> {
    id.as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<Uuid>()
                .map(Id::from)
                .map_err(|_| ValidationError::Invalid(field))
        })
        .transpose()
}

/// Reservation of a room.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier of this [`Booking`].
    pub id: Uuid,

    /// ID of the booked hotel.
    pub hotel_id: Uuid,

    /// ID of the booked room.
    pub room_id: Uuid,

    /// Details of the customer who made this [`Booking`].
    pub customer_details: CustomerDetails,

    /// RFC 3339 date and time when the stay starts.
    pub check_in_date: String,

    /// RFC 3339 date and time when the stay ends.
    pub check_out_date: String,

    /// Number of guests.
    pub guests: u16,

    /// Number of nights of the stay.
    pub nights: u32,

    /// Price of all the nights of the stay.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    /// Currency of the [`Booking::total_price`].
    pub currency: String,

    /// Payment method of this [`Booking`].
    pub payment_method: String,

    /// Lower-case status of this [`Booking`].
    pub status: String,

    /// RFC 3339 date and time when this [`Booking`] was created.
    pub created_at: String,

    /// Booked [`Hotel`], embedded when listing [`Booking`]s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Hotel>,

    /// Booked [`Room`], embedded when listing [`Booking`]s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

/// Details of the customer who made a [`Booking`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Full name of the customer.
    pub full_name: String,

    /// Email of the customer.
    pub email: String,

    /// Phone of the customer.
    pub phone: String,

    /// Postal address of the customer.
    pub address: String,

    /// City of the customer.
    pub city: String,

    /// Country of the customer.
    pub country: String,

    /// Special requests of the customer, possibly empty.
    pub special_requests: String,
}

impl From<domain::Booking> for Booking {
    fn from(booking: domain::Booking) -> Self {
        let domain::Booking {
            id,
            hotel_id,
            room_id,
            customer,
            check_in_at,
            check_out_at,
            guests,
            nights,
            total_price,
            payment_method,
            status,
            created_at,
        } = booking;

        Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            room_id: room_id.into(),
            customer_details: CustomerDetails {
                full_name: customer.full_name.to_string(),
                email: customer.email.to_string(),
                phone: customer.phone.to_string(),
                address: customer.address.to_string(),
                city: customer.city.to_string(),
                country: customer.country.to_string(),
                special_requests: customer.special_requests.to_string(),
            },
            check_in_date: check_in_at.to_rfc3339(),
            check_out_date: check_out_at.to_rfc3339(),
            guests,
            nights,
            total_price: total_price.amount,
            currency: total_price.currency.to_string(),
            payment_method: payment_method.to_string(),
            status: status.to_string().to_lowercase(),
            created_at: created_at.to_rfc3339(),
            hotel: None,
            room: None,
        }
    }
}

impl From<read::booking::Detailed> for Booking {
    fn from(detailed: read::booking::Detailed) -> Self {
        let read::booking::Detailed {
            booking,
            hotel,
            room,
        } = detailed;

        Self {
            hotel: Some(hotel.into()),
            room: Some(room.into()),
            ..Self::from(booking)
        }
    }
}

define_error! {
    enum BookingError {
        #[code = "BOOKING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Booking` does not exist"]
        NotExists,
    }
}

/// Submits a new [`Booking`], responding with `201 Created` on success.
#[tracing::instrument(skip_all)]
pub async fn submit(
    Extension(service): Extension<Service>,
    req: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(http::StatusCode, Json<Booking>), Error> {
    let Json(req) = req.map_err(AsError::into_error)?;
    let cmd = command::SubmitBooking::try_from(req)
        .map_err(AsError::into_error)?;

    let booking = service
        .execute(cmd)
        .await
        .map_err(AsError::into_error)?;

    Ok((http::StatusCode::CREATED, Json(booking.into())))
}

/// Lists all the [`Booking`]s along with their [`Hotel`]s and [`Room`]s, the
/// most recent first.
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(service): Extension<Service>,
) -> Result<Json<Vec<Booking>>, Error> {
    let bookings = service
        .execute(query::bookings::Detailed::by(()))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// Returns a single [`Booking`] by its ID.
#[tracing::instrument(skip_all)]
pub async fn get(
    Extension(service): Extension<Service>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Booking>, Error> {
    let Path(id) = id.map_err(AsError::into_error)?;

    service
        .execute(query::booking::ById::by(id.into()))
        .await
        .map_err(AsError::into_error)?
        .map(|b| Json(b.into()))
        .ok_or_else(|| BookingError::NotExists.into())
}

impl AsError for submit_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::HotelNotExists(_) => Some(HotelError::NotExists.into()),
            Self::RoomNotExists(_) => Some(RoomError::NotExists.into()),
            Self::Stay(e) => e.try_as_error(),
            Self::Validation(e) => e.try_as_error(),
        }
    }
}

impl AsError for ValidationError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "VALIDATION_ERROR",
            status_code: http::StatusCode::BAD_REQUEST,
            message: self.to_string(),
            backtrace: None,
        })
    }
}

impl AsError for StayError {
    fn try_as_error(&self) -> Option<Error> {
        let code = match self {
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
        };
        Some(Error {
            code,
            status_code: http::StatusCode::BAD_REQUEST,
            message: self.to_string(),
            backtrace: None,
        })
    }
}

#[cfg(test)]
mod spec {
    use service::{
        command::{self, submit_booking::ExecutionError},
        domain::{
            booking::{Field, StayError, ValidationError},
            hotel, room,
        },
    };

    use crate::AsError as _;

    use super::{BookingRequest, CustomerDetailsRequest, GuestsRequest};

    fn request() -> BookingRequest {
        BookingRequest {
            hotel_id: Some("6f1c2f5e-3b7a-4c1e-9f3e-2a1d5b8c7e01".into()),
            room_id: Some("0b6f5a2e-8d4c-4f3b-a1e2-7c9d8e6f5a02".into()),
            check_in_date: Some("2024-03-01".into()),
            check_out_date: Some("2024-03-04".into()),
            guests: Some(GuestsRequest::Number(2)),
            customer_details: Some(CustomerDetailsRequest {
                full_name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                phone: Some("+1 555 0100".into()),
                address: Some("1 Main St".into()),
                city: Some("Springfield".into()),
                country: Some("USA".into()),
                special_requests: None,
            }),
        }
    }

    #[test]
    fn deserializes_request_ignoring_total_price() {
        let req: BookingRequest = serde_json::from_value(serde_json::json!({
            "hotelId": "6f1c2f5e-3b7a-4c1e-9f3e-2a1d5b8c7e01",
            "roomId": "0b6f5a2e-8d4c-4f3b-a1e2-7c9d8e6f5a02",
            "checkInDate": "2024-03-01",
            "checkOutDate": "2024-03-04",
            "guests": 2,
            "totalPrice": 1,
            "customerDetails": {
                "fullName": "Jane Doe",
                "email": "jane@example.com"
            }
        }))
        .unwrap();

        let cmd = command::SubmitBooking::try_from(req).unwrap();

        assert!(cmd.hotel_id.is_some());
        assert_eq!(cmd.check_in.as_deref(), Some("2024-03-01"));
        assert_eq!(cmd.guests, Some(2));
        assert_eq!(cmd.customer.email.as_deref(), Some("jane@example.com"));
        assert_eq!(cmd.customer.phone, None);
    }

    #[test]
    fn treats_blank_id_as_missing() {
        let cmd = command::SubmitBooking::try_from(BookingRequest {
            room_id: Some("  ".into()),
            customer_details: None,
            ..request()
        })
        .unwrap();

        assert_eq!(cmd.room_id, None);
        assert_eq!(cmd.customer.full_name, None);
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            command::SubmitBooking::try_from(BookingRequest {
                hotel_id: Some("not-a-uuid".into()),
                ..request()
            })
            .unwrap_err(),
            ValidationError::Invalid(Field::HotelId),
        );
        assert_eq!(
            command::SubmitBooking::try_from(BookingRequest {
                guests: Some(GuestsRequest::Number(-1)),
                ..request()
            })
            .unwrap_err(),
            ValidationError::Invalid(Field::Guests),
        );
    }

    #[test]
    fn reports_non_integer_guests_as_invalid() {
        for guests in [
            serde_json::json!("2"),
            serde_json::json!(2.5),
            serde_json::json!(true),
            serde_json::json!(70_000),
        ] {
            let req: BookingRequest =
                serde_json::from_value(serde_json::json!({
                    "hotelId": "6f1c2f5e-3b7a-4c1e-9f3e-2a1d5b8c7e01",
                    "guests": guests,
                }))
                .unwrap();

            let err = command::SubmitBooking::try_from(req).unwrap_err();

            assert_eq!(
                err,
                ValidationError::Invalid(Field::Guests),
                "{guests}",
            );
            let e = err.as_error();
            assert_eq!(e.status_code, http::StatusCode::BAD_REQUEST);
            assert_eq!(e.code, "VALIDATION_ERROR");
            assert_eq!(e.message, "`guests` is invalid");
        }
    }

    #[test]
    fn accepts_absent_guests() {
        let req: BookingRequest = serde_json::from_value(serde_json::json!({
            "guests": null,
        }))
        .unwrap();

        let cmd = command::SubmitBooking::try_from(req).unwrap();

        assert_eq!(cmd.guests, None);
    }

    #[test]
    fn maps_execution_errors() {
        for (err, status, code) in [
            (
                ExecutionError::Validation(ValidationError::Missing(
                    Field::Phone,
                )),
                http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                ExecutionError::Stay(StayError::InvalidDate(
                    Field::CheckInDate,
                )),
                http::StatusCode::BAD_REQUEST,
                "INVALID_DATE",
            ),
            (
                ExecutionError::Stay(StayError::InvalidDateRange),
                http::StatusCode::BAD_REQUEST,
                "INVALID_DATE_RANGE",
            ),
            (
                ExecutionError::RoomNotExists(room::Id::new()),
                http::StatusCode::NOT_FOUND,
                "ROOM_NOT_EXISTS",
            ),
            (
                ExecutionError::HotelNotExists(hotel::Id::new()),
                http::StatusCode::NOT_FOUND,
                "HOTEL_NOT_EXISTS",
            ),
        ] {
            let e = err.as_error();

            assert_eq!(e.status_code, status, "{err}");
            assert_eq!(e.code, code, "{err}");
        }
    }

    #[test]
    fn names_field_in_validation_message() {
        let e = ExecutionError::Validation(ValidationError::Missing(
            Field::Phone,
        ))
        .as_error();

        assert_eq!(e.message, "`customerDetails.phone` is required");
    }
}
