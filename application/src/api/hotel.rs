//! [`Hotel`]-related definitions.

use axum::{
    extract::{rejection::PathRejection, Path},
    Extension, Json,
};
use common::Handler as _;
use rust_decimal::Decimal;
use serde::Serialize;
use service::{domain, query};
use uuid::Uuid;

use crate::{define_error, AsError, Error, Service};

/// Hotel offering rooms to book.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Unique identifier of this [`Hotel`].
    pub id: Uuid,

    /// Name of this [`Hotel`].
    pub name: String,

    /// Location of this [`Hotel`].
    pub location: String,

    /// Description of this [`Hotel`].
    pub description: String,

    /// URL of the image illustrating this [`Hotel`].
    pub image: String,

    /// Rating of this [`Hotel`] in the `0..=5` range.
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,

    /// Amenities provided by this [`Hotel`].
    pub amenities: Vec<String>,

    /// Human-readable price range of this [`Hotel`].
    pub price_range: String,

    /// RFC 3339 date and time when this [`Hotel`] was created.
    pub created_at: String,
}

impl From<domain::Hotel> for Hotel {
    fn from(hotel: domain::Hotel) -> Self {
        let domain::Hotel {
            id,
            name,
            location,
            description,
            image,
            rating,
            amenities,
            price_range,
            created_at,
        } = hotel;

        Self {
            id: id.into(),
            name: name.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            rating: rating.into(),
            amenities: amenities.iter().map(ToString::to_string).collect(),
            price_range: price_range.to_string(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

define_error! {
    enum HotelError {
        #[code = "HOTEL_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Hotel` does not exist"]
        NotExists,
    }
}

/// Lists all the [`Hotel`]s.
#[tracing::instrument(skip_all)]
pub async fn list(
    Extension(service): Extension<Service>,
) -> Result<Json<Vec<Hotel>>, Error> {
    let hotels = service
        .execute(query::hotels::All::by(()))
        .await
        .map_err(AsError::into_error)?;

    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}

/// Returns a single [`Hotel`] by its ID.
#[tracing::instrument(skip_all)]
pub async fn get(
    Extension(service): Extension<Service>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Hotel>, Error> {
    let Path(id) = id.map_err(AsError::into_error)?;

    service
        .execute(query::hotel::ById::by(id.into()))
        .await
        .map_err(AsError::into_error)?
        .map(|h| Json(h.into()))
        .ok_or_else(|| HotelError::NotExists.into())
}
