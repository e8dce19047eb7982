//! [`Hotel`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{hotel, Hotel},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of the `hotels` table, in the order [`from_row()`] expects.
pub(super) const COLUMNS: &str = "\
    id, name, location, description, image, rating, amenities, price_range, \
    created_at";

/// Reads a [`Hotel`] from the provided [`Row`] having the [`COLUMNS`].
pub(super) fn from_row(row: &Row) -> Hotel {
    Hotel {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
        description: row.get("description"),
        image: row.get("image"),
        rating: row.get("rating"),
        amenities: row.get("amenities"),
        price_range: row.get("price_range"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Vec<Hotel>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Hotel>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Hotel>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM hotels \
             ORDER BY name, id",
        );
        Ok(self
            .query(sql.as_str(), &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Hotel>, hotel::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Hotel>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Hotel>, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM hotels \
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
