//! Abstract storage operations.

use std::marker::PhantomData;

/// Operation persisting a new `T` value.
#[derive(Clone, Copy, Debug)]
pub struct Insert<T>(pub T);

/// Operation reading a value described by `T`, usually a [`By`].
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Selector of a `W` value (like `Option<Entity>` or `Vec<Entity>`) by a `B`
/// key.
///
/// `()` key selects everything.
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Type of the selected value.
    _what: PhantomData<W>,

    /// Key to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] selector with the provided key.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Returns the key of this [`By`] selector.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
