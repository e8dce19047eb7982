//! In-memory [`Database`] implementation.

use std::{collections::HashMap, sync::Arc};

use common::operations::{By, Insert, Select};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{booking, hotel, room, Booking, Hotel, Room},
    infra::{database, Database},
    read,
};

/// In-memory [`Database`] client.
///
/// Clones share the same underlying storage.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<RwLock<State>>);

/// Data stored in a [`Memory`] database.
#[derive(Debug, Default)]
struct State {
    /// Stored [`Hotel`]s.
    hotels: HashMap<hotel::Id, Hotel>,

    /// Stored [`Room`]s.
    rooms: HashMap<room::Id, Room>,

    /// Stored [`Booking`]s.
    bookings: HashMap<booking::Id, Booking>,
}

impl Memory {
    /// Creates a new [`Memory`] database pre-filled with the provided
    /// [`Hotel`]s and [`Room`]s.
    #[must_use]
    pub fn with_catalog(
        hotels: impl IntoIterator<Item = Hotel>,
        rooms: impl IntoIterator<Item = Room>,
    ) -> Self {
        Self(Arc::new(RwLock::new(State {
            hotels: hotels.into_iter().map(|h| (h.id, h)).collect(),
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
            bookings: HashMap::new(),
        })))
    }
}

impl Database<Select<By<Vec<Hotel>, ()>>> for Memory {
    type Ok = Vec<Hotel>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Hotel>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut hotels: Vec<_> =
            self.0.read().await.hotels.values().cloned().collect();
        hotels.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(hotels)
    }
}

impl Database<Select<By<Option<Hotel>, hotel::Id>>> for Memory {
    type Ok = Option<Hotel>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Hotel>, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.read().await.hotels.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<Vec<Room>, hotel::Id>>> for Memory {
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, hotel::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let hotel_id = by.into_inner();

        let mut rooms: Vec<_> = self
            .0
            .read()
            .await
            .rooms
            .values()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect();
        rooms.sort_by(|a, b| {
            a.price.amount.cmp(&b.price.amount).then(a.id.cmp(&b.id))
        });
        Ok(rooms)
    }
}

impl Database<Select<By<Option<Room>, room::Id>>> for Memory {
    type Ok = Option<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Room>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.read().await.rooms.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<Vec<Booking>, ()>>> for Memory {
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Booking>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut bookings: Vec<_> =
            self.0.read().await.bookings.values().cloned().collect();
        bookings.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id))
        });
        Ok(bookings)
    }
}

impl Database<Select<By<Vec<read::booking::Detailed>, ()>>> for Memory {
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

        let state = self.0.read().await;
        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                Some(read::booking::Detailed {
                    hotel: state.hotels.get(&booking.hotel_id)?.clone(),
                    room: state.rooms.get(&booking.room_id)?.clone(),
                    booking,
                })
            })
            .collect())
    }
}

impl Database<Select<By<Option<Booking>, booking::Id>>> for Memory {
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.0.read().await.bookings.get(&by.into_inner()).cloned())
    }
}

impl Database<Insert<Booking>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.0.write().await.bookings.insert(booking.id, booking));
        Ok(())
    }
}
