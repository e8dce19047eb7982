//! [`Customer`] definitions.

use derive_more::{AsRef, Display};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

#[cfg(doc)]
use crate::domain::Booking;

/// Details of a customer making a [`Booking`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Customer {
    /// [`FullName`] of this [`Customer`].
    pub full_name: FullName,

    /// [`Email`] of this [`Customer`].
    pub email: Email,

    /// [`Phone`] of this [`Customer`].
    pub phone: Phone,

    /// Postal [`Address`] of this [`Customer`].
    pub address: Address,

    /// [`City`] of this [`Customer`].
    pub city: City,

    /// [`Country`] of this [`Customer`].
    pub country: Country,

    /// [`SpecialRequests`] of this [`Customer`] to the stay.
    pub special_requests: SpecialRequests,
}

define_text! {
    #[doc = "Full name of a [`Customer`]."]
    struct FullName(max_len = 512);
}

define_text! {
    #[doc = "Email of a [`Customer`]."]
    struct Email(max_len = 320);
}

define_text! {
    #[doc = "Phone of a [`Customer`]."]
    struct Phone(max_len = 64);
}

define_text! {
    #[doc = "Postal address of a [`Customer`]."]
    struct Address(max_len = 512);
}

define_text! {
    #[doc = "City of a [`Customer`]."]
    struct City(max_len = 256);
}

define_text! {
    #[doc = "Country of a [`Customer`]."]
    struct Country(max_len = 256);
}

/// Free-form special requests of a [`Customer`], possibly empty.
#[derive(AsRef, Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[as_ref(forward)]
pub struct SpecialRequests(String);

impl SpecialRequests {
    /// Maximum length of [`SpecialRequests`] in bytes.
    pub const MAX_LEN: usize = 2048;

    /// Creates new [`SpecialRequests`] if the given `requests` are not too
    /// long.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(requests: impl AsRef<str>) -> Option<Self> {
        let requests = requests.as_ref().trim();
        (requests.len() <= Self::MAX_LEN).then(|| Self(requests.to_owned()))
    }

    /// Indicates whether these [`SpecialRequests`] are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
