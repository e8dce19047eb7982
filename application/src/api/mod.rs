//! REST API definitions.

pub mod booking;
pub mod hotel;
pub mod room;

use axum::{routing::get, Router};

pub use self::{booking::Booking, hotel::Hotel, room::Room};

/// Builds the [`Router`] serving the REST API.
///
/// Handlers expect the [`Service`] to be provided via an
/// [`axum::Extension`].
///
/// [`Service`]: crate::Service
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/api/hotels", get(hotel::list))
        .route("/api/hotels/:id", get(hotel::get))
        .route("/api/hotels/:id/rooms", get(room::list_by_hotel))
        .route("/api/rooms/:id", get(room::get))
        .route("/api/bookings", get(booking::list).post(booking::submit))
        .route("/api/bookings/:id", get(booking::get))
}
