//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing the start of a stay.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker type describing the end of a stay.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;
