//! Tests of [`command::SubmitBooking`] against the in-memory database.

use common::{Currency, DateTime, Money};
use rust_decimal::Decimal;
use service::{
    command::{self, submit_booking::ExecutionError, Command as _},
    domain::{
        booking::{self, draft::CustomerDraft, Field, StayError},
        hotel, room, Hotel, Room,
    },
    infra::Memory,
    query, Config, Query as _, Service,
};
use tracerr::Traced;

fn hotel() -> Hotel {
    Hotel {
        id: hotel::Id::new(),
        name: hotel::Name::new("The Grand Palace Hotel").unwrap(),
        location: hotel::Location::new("Miami, USA").unwrap(),
        description: hotel::Description::new("Luxury by the ocean.").unwrap(),
        image: hotel::ImageUrl::new("https://example.com/hotel.jpg").unwrap(),
        rating: hotel::Rating::new(Decimal::new(48, 1)).unwrap(),
        amenities: vec![hotel::Amenity::new("Spa").unwrap()],
        price_range: hotel::PriceRange::new("$200 - $500").unwrap(),
        created_at: DateTime::now().coerce(),
    }
}

fn room(hotel_id: hotel::Id, price: i64, capacity: u16) -> Room {
    Room {
        id: room::Id::new(),
        hotel_id,
        category: room::Category::new("Deluxe King Room").unwrap(),
        price: Money {
            amount: Decimal::from(price),
            currency: Currency::Usd,
        },
        capacity,
        amenities: vec![hotel::Amenity::new("King Bed").unwrap()],
        images: vec![],
        is_available: true,
        description: room::Description::new("Spacious room.").unwrap(),
        created_at: DateTime::now().coerce(),
    }
}

fn customer() -> CustomerDraft {
    CustomerDraft {
        full_name: Some("Jane Doe".into()),
        email: Some("jane@example.com".into()),
        phone: Some("+1 555 0100".into()),
        address: Some("1 Main St".into()),
        city: Some("Springfield".into()),
        country: Some("USA".into()),
        special_requests: Some("Late arrival".into()),
    }
}

struct Fixture {
    service: Service<Memory>,
    hotel: Hotel,
    room: Room,
}

impl Fixture {
    fn new() -> Self {
        let hotel = hotel();
        let room = room(hotel.id, 200, 2);
        let service = Service::new(
            Config::default(),
            Memory::with_catalog([hotel.clone()], [room.clone()]),
        );
        Self {
            service,
            hotel,
            room,
        }
    }

    fn request(&self) -> command::SubmitBooking {
        command::SubmitBooking {
            hotel_id: Some(self.hotel.id),
            room_id: Some(self.room.id),
            check_in: Some("2024-03-01".into()),
            check_out: Some("2024-03-04".into()),
            guests: Some(2),
            customer: customer(),
        }
    }

    async fn submit(
        &self,
        cmd: command::SubmitBooking,
    ) -> Result<booking::Booking, Traced<ExecutionError>> {
        self.service.execute(cmd).await
    }

    async fn bookings(&self) -> Vec<booking::Booking> {
        self.service
            .execute(query::bookings::All::by(()))
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn creates_priced_booking() {
    let fx = Fixture::new();

    let booking = fx.submit(fx.request()).await.unwrap();

    assert_eq!(booking.hotel_id, fx.hotel.id);
    assert_eq!(booking.room_id, fx.room.id);
    assert_eq!(booking.nights, 3);
    assert_eq!(
        booking.total_price,
        Money {
            amount: Decimal::from(600),
            currency: Currency::Usd,
        },
    );
    assert_eq!(booking.status, booking::Status::Confirmed);
    assert_eq!(booking.payment_method.to_string(), "Cash on Delivery");
    assert_eq!(booking.customer.special_requests.to_string(), "Late arrival");

    let stored = fx
        .service
        .execute(query::booking::ById::by(booking.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, booking.id);
    assert_eq!(stored.total_price, booking.total_price);
}

#[tokio::test]
async fn uses_configured_payment_method() {
    let hotel = hotel();
    let room = room(hotel.id, 150, 4);
    let service = Service::new(
        Config {
            payment_method: booking::PaymentMethod::new("Bank Transfer")
                .unwrap(),
        },
        Memory::with_catalog([hotel.clone()], [room.clone()]),
    );

    let booking = service
        .execute(command::SubmitBooking {
            hotel_id: Some(hotel.id),
            room_id: Some(room.id),
            check_in: Some("2024-12-30".into()),
            check_out: Some("2025-01-02".into()),
            guests: Some(4),
            customer: customer(),
        })
        .await
        .unwrap();

    assert_eq!(booking.payment_method.to_string(), "Bank Transfer");
    assert_eq!(booking.nights, 3);
    assert_eq!(booking.total_price.amount, Decimal::from(450));
}

#[tokio::test]
async fn rejects_unknown_room_without_writing() {
    let fx = Fixture::new();
    let missing = room::Id::new();

    let err = fx
        .submit(command::SubmitBooking {
            room_id: Some(missing),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::RoomNotExists(id) if *id == missing,
        ),
        "unexpected error: {err}",
    );
    assert!(fx.bookings().await.is_empty());
}

#[tokio::test]
async fn rejects_mismatching_hotel() {
    let fx = Fixture::new();
    let other = hotel::Id::new();

    let err = fx
        .submit(command::SubmitBooking {
            hotel_id: Some(other),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::HotelNotExists(id) if *id == other,
        ),
        "unexpected error: {err}",
    );
    assert!(fx.bookings().await.is_empty());
}

#[tokio::test]
async fn rejects_missing_email_without_writing() {
    let fx = Fixture::new();
    let mut req = fx.request();
    req.customer.email = None;

    let err = fx.submit(req).await.unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Validation(booking::ValidationError::Missing(
                Field::Email,
            )),
        ),
        "unexpected error: {err}",
    );
    assert!(fx.bookings().await.is_empty());
}

#[tokio::test]
async fn names_empty_phone() {
    let fx = Fixture::new();
    let mut req = fx.request();
    req.customer.phone = Some(String::new());

    let err = fx.submit(req).await.unwrap_err();

    let ExecutionError::Validation(e) = err.as_ref() else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(e.field(), Field::Phone);
    assert_eq!(e.field().to_string(), "customerDetails.phone");
}

#[tokio::test]
async fn rejects_missing_identifiers_before_lookup() {
    let fx = Fixture::new();

    let err = fx
        .submit(command::SubmitBooking {
            hotel_id: None,
            room_id: Some(room::Id::new()),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Validation(booking::ValidationError::Missing(
                Field::HotelId,
            )),
        ),
        "unexpected error: {err}",
    );
}

#[tokio::test]
async fn rejects_reversed_dates() {
    let fx = Fixture::new();

    let err = fx
        .submit(command::SubmitBooking {
            check_in: Some("2024-03-04".into()),
            check_out: Some("2024-03-01".into()),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Stay(StayError::InvalidDateRange),
        ),
        "unexpected error: {err}",
    );
    assert!(fx.bookings().await.is_empty());
}

#[tokio::test]
async fn rejects_unparseable_date() {
    let fx = Fixture::new();

    let err = fx
        .submit(command::SubmitBooking {
            check_out: Some("next week".into()),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Stay(StayError::InvalidDate(Field::CheckOutDate)),
        ),
        "unexpected error: {err}",
    );
}

#[tokio::test]
async fn rejects_guests_over_capacity() {
    let fx = Fixture::new();

    let err = fx
        .submit(command::SubmitBooking {
            guests: Some(3),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Validation(booking::ValidationError::Invalid(
                Field::Guests,
            )),
        ),
        "unexpected error: {err}",
    );
    assert!(fx.bookings().await.is_empty());
}

#[tokio::test]
async fn lists_bookings_newest_first() {
    let fx = Fixture::new();

    let first = fx.submit(fx.request()).await.unwrap();
    let second = fx
        .submit(command::SubmitBooking {
            check_in: Some("2024-04-01".into()),
            check_out: Some("2024-04-02".into()),
            ..fx.request()
        })
        .await
        .unwrap();

    let ids: Vec<_> = fx.bookings().await.into_iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    if first.created_at != second.created_at {
        assert_eq!(ids, [second.id, first.id]);
    }
}

#[tokio::test]
async fn queries_catalog() {
    let hotel = hotel();
    let cheap = room(hotel.id, 150, 2);
    let pricey = room(hotel.id, 450, 3);
    let foreign = room(hotel::Id::new(), 100, 1);
    let service = Service::new(
        Config::default(),
        Memory::with_catalog(
            [hotel.clone()],
            [pricey.clone(), foreign, cheap.clone()],
        ),
    );

    let hotels = service.execute(query::hotels::All::by(())).await.unwrap();
    assert_eq!(hotels.len(), 1);

    let rooms = service
        .execute(query::rooms::ByHotel::by(hotel.id))
        .await
        .unwrap();
    assert_eq!(
        rooms.iter().map(|r| r.id).collect::<Vec<_>>(),
        [cheap.id, pricey.id],
    );

    assert!(service
        .execute(query::hotel::ById::by(hotel::Id::new()))
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        service
            .execute(query::room::ById::by(pricey.id))
            .await
            .unwrap()
            .map(|r| r.capacity),
        Some(3),
    );
}

#[tokio::test]
async fn rejects_out_of_range_year_without_writing() {
    let fx = Fixture::new();

    let err = fx
        .submit(command::SubmitBooking {
            check_in: Some("-0001-03-01".into()),
            check_out: Some("-0001-03-04".into()),
            ..fx.request()
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Stay(StayError::InvalidDate(Field::CheckInDate)),
        ),
        "unexpected error: {err}",
    );
    assert!(fx.bookings().await.is_empty());
}

#[tokio::test]
async fn rejects_free_room_without_writing() {
    let hotel = hotel();
    let free = room(hotel.id, 0, 2);
    let service = Service::new(
        Config::default(),
        Memory::with_catalog([hotel.clone()], [free.clone()]),
    );

    let err = service
        .execute(command::SubmitBooking {
            hotel_id: Some(hotel.id),
            room_id: Some(free.id),
            check_in: Some("2024-03-01".into()),
            check_out: Some("2024-03-04".into()),
            guests: Some(2),
            customer: customer(),
        })
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.as_ref(),
            ExecutionError::Validation(booking::ValidationError::Invalid(
                Field::TotalPrice,
            )),
        ),
        "unexpected error: {err}",
    );
    assert!(service
        .execute(query::bookings::All::by(()))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn lists_bookings_with_hotel_and_room() {
    let fx = Fixture::new();
    let other = room(fx.hotel.id, 90, 1);
    let service = Service::new(
        Config::default(),
        Memory::with_catalog(
            [fx.hotel.clone()],
            [fx.room.clone(), other.clone()],
        ),
    );

    let first = service.execute(fx.request()).await.unwrap();
    let second = service
        .execute(command::SubmitBooking {
            room_id: Some(other.id),
            guests: Some(1),
            ..fx.request()
        })
        .await
        .unwrap();

    let detailed = service
        .execute(query::bookings::Detailed::by(()))
        .await
        .unwrap();

    assert_eq!(detailed.len(), 2);
    for (booking, room) in [(&first, &fx.room), (&second, &other)] {
        let entry = detailed
            .iter()
            .find(|d| d.booking.id == booking.id)
            .unwrap_or_else(|| panic!("`Booking` {} is missing", booking.id));
        assert_eq!(entry.hotel.id, fx.hotel.id);
        assert_eq!(entry.hotel.name.to_string(), "The Grand Palace Hotel");
        assert_eq!(entry.room.id, room.id);
        assert_eq!(entry.room.price, room.price);
    }
}
