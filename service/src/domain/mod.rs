//! Domain definitions.

/// Defines a text value, which is trimmed, non-empty and no longer than the
/// provided `max_len` in bytes.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident(max_len = $max_len:literal);
    ) => {
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[cfg_attr(
            feature = "postgres",
            derive(::postgres_types::FromSql, ::postgres_types::ToSql),
            postgres(transparent),
        )]
        #[as_ref(forward)]
        #[doc = $doc]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given ",
                "`value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            #[doc = concat!(
                "Checks whether the given `value` is a valid [`",
                stringify!($name), "`].",
            )]
            fn check(value: impl AsRef<str>) -> bool {
                let value = value.as_ref();
                value.trim() == value
                    && !value.is_empty()
                    && value.len() <= $max_len
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

pub mod booking;
pub mod hotel;
pub mod room;

pub use self::{booking::Booking, hotel::Hotel, room::Room};
