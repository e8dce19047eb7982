//! [`Booking`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Insert, Select},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        booking::{self, Customer},
        Booking,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

/// Columns of the `bookings` table, in the order [`from_row()`] expects.
const COLUMNS: &str = "\
    id, hotel_id, room_id, \
    customer_full_name, customer_email, customer_phone, \
    customer_address, customer_city, customer_country, \
    customer_special_requests, \
    check_in_at, check_out_at, guests, nights, \
    total_price, total_price_currency, \
    payment_method, status, created_at";

/// Reads a [`Booking`] from the provided [`Row`] having the [`COLUMNS`].
fn from_row(row: &Row) -> Booking {
    Booking {
        id: row.get("id"),
        hotel_id: row.get("hotel_id"),
        room_id: row.get("room_id"),
        customer: Customer {
            full_name: row.get("customer_full_name"),
            email: row.get("customer_email"),
            phone: row.get("customer_phone"),
            address: row.get("customer_address"),
            city: row.get("customer_city"),
            country: row.get("customer_country"),
            special_requests: row.get("customer_special_requests"),
        },
        check_in_at: row.get("check_in_at"),
        check_out_at: row.get("check_out_at"),
        guests: u16::try_from(row.get::<_, i32>("guests"))
            .expect("`guests` overflow"),
        nights: u32::try_from(row.get::<_, i32>("nights"))
            .expect("`nights` overflow"),
        total_price: Money {
            amount: row.get("total_price"),
            currency: row.get("total_price_currency"),
        },
        payment_method: row.get("payment_method"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Vec<Booking>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Booking>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sql = format!(
            "SELECT {COLUMNS} \
             FROM bookings \
             ORDER BY created_at DESC, id",
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

impl<C> Database<Select<By<Vec<read::booking::Detailed>, ()>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::booking::Detailed>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<read::booking::Detailed>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let bookings = self
            .execute(Select(By::<Vec<Booking>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let mut hotel_ids: Vec<_> =
            bookings.iter().map(|b| b.hotel_id).collect();
        hotel_ids.sort_unstable();
        hotel_ids.dedup();
        let mut room_ids: Vec<_> = bookings.iter().map(|b| b.room_id).collect();
        room_ids.sort_unstable();
        room_ids.dedup();

        let sql = format!(
            "SELECT {} \
             FROM hotels \
             WHERE id = ANY($1::UUID[])",
            super::hotel::COLUMNS,
        );
        let hotels: HashMap<_, _> = self
            .query(sql.as_str(), &[&hotel_ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(super::hotel::from_row)
            .map(|h| (h.id, h))
            .collect();

        let sql = format!(
            "SELECT {} \
             FROM rooms \
             WHERE id = ANY($1::UUID[])",
            super::room::COLUMNS,
        );
        let rooms: HashMap<_, _> = self
            .query(sql.as_str(), &[&room_ids])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(super::room::from_row)
            .map(|r| (r.id, r))
            .collect();

        // Foreign keys guarantee both to be present.
        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                Some(read::booking::Detailed {
                    hotel: hotels.get(&booking.hotel_id)?.clone(),
                    room: rooms.get(&booking.room_id)?.clone(),
                    booking,
                })
            })
            .collect())
    }
}

impl<C> Database<Select<By<Option<Booking>, booking::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM bookings \
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

impl<C> Database<Insert<Booking>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        let Booking {
            id,
            hotel_id,
            room_id,
            customer:
                Customer {
                    full_name,
                    email,
                    phone,
                    address,
                    city,
                    country,
                    special_requests,
                },
            check_in_at,
            check_out_at,
            guests,
            nights,
            total_price,
            payment_method,
            status,
            created_at,
        } = booking;

        let guests = i32::from(guests);
        // Dates are limited to `±9999` years, so `nights` always fit `INT4`.
        let nights = i32::try_from(nights).expect("`nights` overflow");

        const SQL: &str = "\
            INSERT INTO bookings (\
                id, hotel_id, room_id, \
                customer_full_name, customer_email, customer_phone, \
                customer_address, customer_city, customer_country, \
                customer_special_requests, \
                check_in_at, check_out_at, guests, nights, \
                total_price, total_price_currency, \
                payment_method, status, created_at\
            ) VALUES (\
                $1::UUID, $2::UUID, $3::UUID, \
                $4::VARCHAR, $5::VARCHAR, $6::VARCHAR, \
                $7::VARCHAR, $8::VARCHAR, $9::VARCHAR, \
                $10::VARCHAR, \
                $11::TIMESTAMPTZ, $12::TIMESTAMPTZ, $13::INT4, $14::INT4, \
                $15::NUMERIC, $16::INT2, \
                $17::VARCHAR, $18::INT2, $19::TIMESTAMPTZ\
            )";
        self.exec(
            SQL,
            &[
                &id,
                &hotel_id,
                &room_id,
                &full_name,
                &email,
                &phone,
                &address,
                &city,
                &country,
                &special_requests,
                &check_in_at,
                &check_out_at,
                &guests,
                &nights,
                &total_price.amount,
                &total_price.currency,
                &payment_method,
                &status,
                &created_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
