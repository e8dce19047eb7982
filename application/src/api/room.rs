//! [`Room`]-related definitions.

use axum::{
    extract::{rejection::PathRejection, Path},
    Extension, Json,
};
use common::Handler as _;
use rust_decimal::Decimal;
use serde::Serialize;
use service::{domain, query};
use uuid::Uuid;

use crate::{api::Hotel, define_error, AsError, Error, Service};

/// Bookable room of a [`Hotel`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique identifier of this [`Room`].
    pub id: Uuid,

    /// ID of the [`Hotel`] this [`Room`] belongs to.
    pub hotel_id: Uuid,

    /// [`Hotel`] this [`Room`] belongs to, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Hotel>,

    /// Type label of this [`Room`].
    #[serde(rename = "type")]
    pub category: String,

    /// Price of a single night in this [`Room`].
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Currency of the [`Room::price`].
    pub currency: String,

    /// Maximum number of guests this [`Room`] accommodates.
    pub capacity: u16,

    /// Amenities provided by this [`Room`].
    pub amenities: Vec<String>,

    /// URLs of the images illustrating this [`Room`].
    pub images: Vec<String>,

    /// Indicator whether this [`Room`] is offered for booking.
    pub available: bool,

    /// Description of this [`Room`].
    pub description: String,

    /// RFC 3339 date and time when this [`Room`] was created.
    pub created_at: String,
}

impl From<domain::Room> for Room {
    fn from(room: domain::Room) -> Self {
        let domain::Room {
            id,
            hotel_id,
            category,
            price,
            capacity,
            amenities,
            images,
            is_available,
            description,
            created_at,
        } = room;

        Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            hotel: None,
            category: category.to_string(),
            price: price.amount,
            currency: price.currency.to_string(),
            capacity,
            amenities: amenities.iter().map(ToString::to_string).collect(),
            images: images.iter().map(ToString::to_string).collect(),
            available: is_available,
            description: description.to_string(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

define_error! {
    enum RoomError {
        #[code = "ROOM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Room` does not exist"]
        NotExists,
    }
}

/// Lists all the [`Room`]s of a [`Hotel`], the cheapest first.
#[tracing::instrument(skip_all)]
pub async fn list_by_hotel(
    Extension(service): Extension<Service>,
    hotel_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Room>>, Error> {
    let Path(hotel_id) = hotel_id.map_err(AsError::into_error)?;

    let rooms = service
        .execute(query::rooms::ByHotel::by(hotel_id.into()))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// Returns a single [`Room`] by its ID, along with its [`Hotel`].
#[tracing::instrument(skip_all)]
pub async fn get(
    Extension(service): Extension<Service>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Room>, Error> {
    let Path(id) = id.map_err(AsError::into_error)?;

    let room = service
        .execute(query::room::ById::by(id.into()))
        .await
        .map_err(AsError::into_error)?
        .ok_or_else(|| Error::from(RoomError::NotExists))?;
    let hotel = service
        .execute(query::hotel::ById::by(room.hotel_id))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(Room {
        hotel: hotel.map(Into::into),
        ..Room::from(room)
    }))
}
