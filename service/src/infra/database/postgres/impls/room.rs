//! [`Room`]-related [`Database`] implementations.

use common::{
    operations::{By, Select},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{hotel, room, Room},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of the `rooms` table, in the order [`from_row()`] expects.
pub(super) const COLUMNS: &str = "\
    id, hotel_id, category, price, price_currency, capacity, \
    amenities, images, is_available, description, created_at";

/// Reads a [`Room`] from the provided [`Row`] having the [`COLUMNS`].
pub(super) fn from_row(row: &Row) -> Room {
    Room {
        id: row.get("id"),
        hotel_id: row.get("hotel_id"),
        category: row.get("category"),
        price: Money {
            amount: row.get("price"),
            currency: row.get("price_currency"),
        },
        capacity: u16::try_from(row.get::<_, i32>("capacity"))
            .expect("`capacity` overflow"),
        amenities: row.get("amenities"),
        images: row.get("images"),
        is_available: row.get("is_available"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Vec<Room>, hotel::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let hotel_id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM rooms \
             WHERE hotel_id = $1::UUID \
             ORDER BY price, id",
        );
        Ok(self
            .query(sql.as_str(), &[&hotel_id])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Room>, room::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Room>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM rooms \
             WHERE id = $1::UUID",
        );
        Ok(self
            .query_opt(sql.as_str(), &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}
