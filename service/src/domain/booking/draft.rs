//! [`Draft`] of a [`Booking`] and its validation.

use common::Money;
use derive_more::{Display, Error};
use rust_decimal::Decimal;

#[cfg(doc)]
use crate::domain::{Hotel, Room};
use crate::domain::{hotel, room};

use super::{
    customer, Booking, CheckInDateTime, CheckOutDateTime, CreationDateTime,
    Customer, Guests, Id, Nights, PaymentMethod, Status,
};

/// Candidate [`Booking`] which hasn't been validated yet.
///
/// Every [`Option`]al field is required to be present.
#[derive(Clone, Debug, Default)]
pub struct Draft {
    /// ID of the [`Hotel`] to book.
    pub hotel_id: Option<hotel::Id>,

    /// ID of the [`Room`] to book.
    pub room_id: Option<room::Id>,

    /// [`CustomerDraft`] of the [`Customer`] making the [`Booking`].
    pub customer: CustomerDraft,

    /// [`CheckInDateTime`] of the stay.
    pub check_in_at: Option<CheckInDateTime>,

    /// [`CheckOutDateTime`] of the stay.
    pub check_out_at: Option<CheckOutDateTime>,

    /// Number of guests staying in the [`Room`].
    pub guests: Option<Guests>,

    /// Number of [`Nights`] of the stay.
    pub nights: Option<Nights>,

    /// Price of all the [`Nights`] of the stay.
    pub total_price: Option<Money>,

    /// [`PaymentMethod`] of the [`Booking`].
    pub payment_method: PaymentMethod,

    /// Initial [`Status`] of the [`Booking`].
    pub status: Status,
}

impl Draft {
    /// Validates this [`Draft`] and materializes it into a [`Booking`] with
    /// the provided [`Id`] and [`CreationDateTime`].
    ///
    /// # Errors
    ///
    /// With a [`ValidationError`] naming the first [`Field`] being absent,
    /// empty or malformed.
    pub fn into_booking(
        self,
        id: Id,
        created_at: CreationDateTime,
    ) -> Result<Booking, ValidationError> {
        use ValidationError as E;

        let Self {
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
        } = self;

        let hotel_id = hotel_id.ok_or(E::Missing(Field::HotelId))?;
        let room_id = room_id.ok_or(E::Missing(Field::RoomId))?;
        let customer = customer.validate()?;
        let check_in_at = check_in_at.ok_or(E::Missing(Field::CheckInDate))?;
        let check_out_at =
            check_out_at.ok_or(E::Missing(Field::CheckOutDate))?;
        if check_out_at.coerce::<()>() <= check_in_at.coerce() {
            return Err(E::Invalid(Field::CheckOutDate));
        }
        let guests = guests.ok_or(E::Missing(Field::Guests))?;
        if guests == 0 {
            return Err(E::Invalid(Field::Guests));
        }
        let nights = nights.ok_or(E::Missing(Field::Nights))?;
        if nights == 0 {
            return Err(E::Invalid(Field::Nights));
        }
        let total_price = total_price.ok_or(E::Missing(Field::TotalPrice))?;
        if total_price.amount <= Decimal::ZERO {
            return Err(E::Invalid(Field::TotalPrice));
        }

        Ok(Booking {
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
        })
    }
}

/// Raw details of a [`Customer`] which haven't been validated yet.
#[derive(Clone, Debug, Default)]
pub struct CustomerDraft {
    /// Full name of the [`Customer`].
    pub full_name: Option<String>,

    /// Email of the [`Customer`].
    pub email: Option<String>,

    /// Phone of the [`Customer`].
    pub phone: Option<String>,

    /// Postal address of the [`Customer`].
    pub address: Option<String>,

    /// City of the [`Customer`].
    pub city: Option<String>,

    /// Country of the [`Customer`].
    pub country: Option<String>,

    /// Special requests of the [`Customer`], if any.
    pub special_requests: Option<String>,
}

impl CustomerDraft {
    /// Validates this [`CustomerDraft`] into a [`Customer`].
    ///
    /// # Errors
    ///
    /// With a [`ValidationError`] naming the first [`Field`] being absent,
    /// empty or malformed.
    pub fn validate(self) -> Result<Customer, ValidationError> {
        let Self {
            full_name,
            email,
            phone,
            address,
            city,
            country,
            special_requests,
        } = self;

        Ok(Customer {
            full_name: required(
                full_name,
                Field::FullName,
                customer::FullName::new,
            )?,
            email: required(email, Field::Email, customer::Email::new)?,
            phone: required(phone, Field::Phone, customer::Phone::new)?,
            address: required(address, Field::Address, customer::Address::new)?,
            city: required(city, Field::City, customer::City::new)?,
            country: required(country, Field::Country, customer::Country::new)?,
            special_requests: customer::SpecialRequests::new(
                special_requests.unwrap_or_default(),
            )
            .ok_or(ValidationError::Invalid(Field::SpecialRequests))?,
        })
    }
}

/// Trims the provided `value` and constructs a `T` out of it.
///
/// # Errors
///
/// - [`ValidationError::Missing`] if the `value` is absent or blank.
/// - [`ValidationError::Invalid`] if `T` cannot be constructed.
fn required<T>(
    value: Option<String>,
    field: Field,
    new: impl FnOnce(String) -> Option<T>,
) -> Result<T, ValidationError> {
    let value = value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::Missing(field))?;
    new(value.to_owned()).ok_or(ValidationError::Invalid(field))
}

/// Field of a [`Booking`] request.
///
/// Displayed as it's named in the API.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Field {
    /// ID of the [`Hotel`].
    #[display("hotelId")]
    HotelId,

    /// ID of the [`Room`].
    #[display("roomId")]
    RoomId,

    /// Full name of the [`Customer`].
    #[display("customerDetails.fullName")]
    FullName,

    /// Email of the [`Customer`].
    #[display("customerDetails.email")]
    Email,

    /// Phone of the [`Customer`].
    #[display("customerDetails.phone")]
    Phone,

    /// Postal address of the [`Customer`].
    #[display("customerDetails.address")]
    Address,

    /// City of the [`Customer`].
    #[display("customerDetails.city")]
    City,

    /// Country of the [`Customer`].
    #[display("customerDetails.country")]
    Country,

    /// Special requests of the [`Customer`].
    #[display("customerDetails.specialRequests")]
    SpecialRequests,

    /// Check-in date of the stay.
    #[display("checkInDate")]
    CheckInDate,

    /// Check-out date of the stay.
    #[display("checkOutDate")]
    CheckOutDate,

    /// Number of guests.
    #[display("guests")]
    Guests,

    /// Number of nights.
    #[display("nights")]
    Nights,

    /// Total price of the stay.
    #[display("totalPrice")]
    TotalPrice,
}

/// Error of a [`Draft`] validation.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// Required [`Field`] is absent or empty.
    #[display("`{_0}` is required")]
    Missing(#[error(not(source))] Field),

    /// [`Field`] has a malformed value.
    #[display("`{_0}` is invalid")]
    Invalid(#[error(not(source))] Field),
}

impl ValidationError {
    /// Returns the [`Field`] this [`ValidationError`] is about.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::Missing(f) | Self::Invalid(f) => f,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{Currency, DateTimeOf, Money};

    use crate::domain::{hotel, room};

    use super::{
        CreationDateTime, CustomerDraft, Draft, Field, Id, PaymentMethod,
        Status, ValidationError,
    };

    fn customer() -> CustomerDraft {
        CustomerDraft {
            full_name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+1 555 0100".into()),
            address: Some("1 Main St".into()),
            city: Some("Springfield".into()),
            country: Some("USA".into()),
            special_requests: None,
        }
    }

    fn draft() -> Draft {
        Draft {
            hotel_id: Some(hotel::Id::new()),
            room_id: Some(room::Id::new()),
            customer: customer(),
            check_in_at: Some(DateTimeOf::parse("2024-03-01").unwrap()),
            check_out_at: Some(DateTimeOf::parse("2024-03-04").unwrap()),
            guests: Some(2),
            nights: Some(3),
            total_price: Some(Money {
                amount: 600.into(),
                currency: Currency::Usd,
            }),
            payment_method: PaymentMethod::default(),
            status: Status::default(),
        }
    }

    #[test]
    fn materializes_valid_draft() {
        let id = Id::new();
        let booking = draft()
            .into_booking(id, CreationDateTime::now())
            .unwrap();

        assert_eq!(booking.id, id);
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.guests, 2);
        assert_eq!(booking.status, Status::Confirmed);
        assert_eq!(booking.payment_method.to_string(), "Cash on Delivery");
        assert_eq!(booking.customer.full_name.to_string(), "Jane Doe");
        assert!(booking.customer.special_requests.is_empty());
    }

    #[test]
    fn trims_customer_details() {
        let mut draft = draft();
        draft.customer.city = Some("  Springfield ".into());
        draft.customer.special_requests = Some(" late arrival ".into());

        let booking = draft
            .into_booking(Id::new(), CreationDateTime::now())
            .unwrap();

        assert_eq!(booking.customer.city.to_string(), "Springfield");
        assert_eq!(
            booking.customer.special_requests.to_string(),
            "late arrival",
        );
    }

    #[test]
    fn names_missing_field() {
        let cases: [(fn(&mut Draft), Field); 8] = [
            (|d| d.hotel_id = None, Field::HotelId),
            (|d| d.room_id = None, Field::RoomId),
            (|d| d.customer.full_name = None, Field::FullName),
            (|d| d.customer.email = None, Field::Email),
            (|d| d.customer.phone = Some(String::new()), Field::Phone),
            (|d| d.customer.country = Some("   ".into()), Field::Country),
            (|d| d.check_in_at = None, Field::CheckInDate),
            (|d| d.guests = None, Field::Guests),
        ];

        for (spoil, field) in cases {
            let mut draft = draft();
            spoil(&mut draft);

            let err = draft
                .into_booking(Id::new(), CreationDateTime::now())
                .unwrap_err();

            assert_eq!(err, ValidationError::Missing(field));
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn reports_first_missing_field() {
        let mut draft = draft();
        draft.customer.phone = None;
        draft.customer.email = None;

        assert_eq!(
            draft
                .into_booking(Id::new(), CreationDateTime::now())
                .unwrap_err(),
            ValidationError::Missing(Field::Email),
        );
    }

    #[test]
    fn rejects_invalid_values() {
        let mut zero_guests = draft();
        zero_guests.guests = Some(0);
        assert_eq!(
            zero_guests
                .into_booking(Id::new(), CreationDateTime::now())
                .unwrap_err(),
            ValidationError::Invalid(Field::Guests),
        );

        let mut reversed = draft();
        reversed.check_out_at = Some(DateTimeOf::parse("2024-02-28").unwrap());
        assert_eq!(
            reversed
                .into_booking(Id::new(), CreationDateTime::now())
                .unwrap_err(),
            ValidationError::Invalid(Field::CheckOutDate),
        );

        let mut free = draft();
        free.total_price = Some(Money {
            amount: 0.into(),
            currency: Currency::Usd,
        });
        assert_eq!(
            free.into_booking(Id::new(), CreationDateTime::now())
                .unwrap_err(),
            ValidationError::Invalid(Field::TotalPrice),
        );

        let mut too_long = draft();
        too_long.customer.phone = Some("5".repeat(65));
        assert_eq!(
            too_long
                .into_booking(Id::new(), CreationDateTime::now())
                .unwrap_err(),
            ValidationError::Invalid(Field::Phone),
        );
    }

    #[test]
    fn displays_api_field_names() {
        assert_eq!(
            ValidationError::Missing(Field::Phone).to_string(),
            "`customerDetails.phone` is required",
        );
        assert_eq!(
            ValidationError::Invalid(Field::CheckOutDate).to_string(),
            "`checkOutDate` is invalid",
        );
    }
}
