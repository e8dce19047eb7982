//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of `Args`.
///
/// Commands and queries of a service, as well as the operations of its
/// storage, are all expressed as [`Handler`]s of different `Args`, so a
/// single type may handle many of them.
pub trait Handler<Args = ()> {
    /// Result of a successful [`Handler::execute()`].
    type Ok;

    /// Error of a failed [`Handler::execute()`].
    type Err;

    /// Handles the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
