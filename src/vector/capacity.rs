//! The Vector capacity, and its growth policy.

use super::failure::{Failure, Result};

/// The capacity reserved up-front by `Vector::with_default_capacity`.
pub const DEFAULT_CAPACITY: usize = 8;

/// The factor by which the capacity of a full `Vector` is scaled when it grows.
pub const SCALING_FACTOR: usize = 2;

/// The number of slots of a buffer, whether initialized or not.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Capacity(pub usize);

impl Capacity {
    //  Returns the capacity to grow to when a buffer holding `length` elements is full.
    //
    //  The policy is `SCALING_FACTOR * length + 1`, so that an empty buffer grows too.
    //
    //  #   Errors
    //
    //  Returns `ElementsOverflow` if the new capacity overflows.
    pub fn grown(length: Length) -> Result<Self> {
        length.0.checked_mul(SCALING_FACTOR)
            .and_then(|n| n.checked_add(1))
            .map(Capacity)
            .ok_or(Failure::ElementsOverflow)
    }
}

/// The index of an element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementIndex(pub usize);

/// The number of initialized elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Length(pub usize);
