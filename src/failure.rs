//! The Failure and Result types of this library.
//!
//! The `Vector` supports faillible allocations, and checks the indexes it is handed. Any method which attempts to
//! allocate memory, or which takes an index or range, may fail. The cause of the error is then represented as a
//! `Failure`.
//!
//! All faillible methods come in two versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! Failures come in two kinds, see `FailureKind`:
//!
//! -   Allocation failures, for which the caller may decide to retry later, or give up.
//! -   Precondition failures, for which the caller should fix the arguments.
//!
//! In either case, the `Vector` is left untouched by the failed operation.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The number of bytes to allocate cannot be calculated due to overflowing.
    BytesOverflow,
    /// The number of elements cannot be calculated due to overflowing.
    ElementsOverflow,
    /// The allocator could not allocate memory.
    OutOfMemory,
    /// The index does not designate an element.
    OutOfBounds,
    /// The range is reversed, or extends past the last element.
    InvalidRange,
    /// There is no element to remove.
    Empty,
}

/// The kind of a `Failure`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum FailureKind {
    /// The memory could not be allocated.
    Allocation,
    /// The arguments did not satisfy the pre-conditions of the operation.
    Precondition,
}

impl Failure {
    /// Returns the kind of failure.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use dynvec::failure::{Failure, FailureKind};
    /// assert_eq!(FailureKind::Allocation, Failure::OutOfMemory.kind());
    /// assert_eq!(FailureKind::Precondition, Failure::OutOfBounds.kind());
    /// ```
    pub fn kind(self) -> FailureKind {
        match self {
            Failure::BytesOverflow | Failure::ElementsOverflow | Failure::OutOfMemory => FailureKind::Allocation,
            Failure::OutOfBounds | Failure::InvalidRange | Failure::Empty => FailureKind::Precondition,
        }
    }

    /// Returns whether memory could not be allocated.
    pub fn is_allocation(self) -> bool { self.kind() == FailureKind::Allocation }

    /// Returns whether the arguments were rejected.
    pub fn is_precondition(self) -> bool { self.kind() == FailureKind::Precondition }
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;
