//! #   The Vector.
//!
//! The `Vector` is a growable array: a single contiguous buffer, holding `len` elements out of `capacity` slots.
//!
//! ##  Under the covers.
//!
//! Under the covers the `Vector` is a pointer, a capacity, and a length. When full, it grows by relocating its
//! elements into a new buffer of `2 * len + 1` slots, which makes appending amortized O(1).
//!
//! Relocation always allocates the new buffer before releasing the former one, hence a failure to allocate never loses
//! any element.
//!
//! #   Example: basic
//!
//! General usage of `Vector` involves pushing elements at the back, and accessing them by index.
//!
//! The faillible equivalents exist too: `try_push_back`, `try_insert`, ... will return a `Result` indicating whether
//! the operation succeeded, and the cause of its failure if it did not.
//!
//! ```
//! use dynvec::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::new();
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_back(3);
//!
//! assert_eq!(3, vec.len());
//! assert_eq!(1, vec[0]);
//!
//! vec.erase(1);
//! assert_eq!(&[1, 3], vec.as_slice());
//!
//! vec.insert(1, 2);
//! assert_eq!(&[1, 2, 3], vec.as_slice());
//!
//! assert_eq!(3, vec.pop_back());
//! assert_eq!(&[1, 2], vec.as_slice());
//! ```
//!
//! #   Example: managing capacity
//!
//! `Vector` provides multiple ways to manage the capacity available:
//!
//! -   `reserve` and `try_reserve` ensure a minimum capacity, allocating exactly what is asked for.
//! -   `resize` and `assign` set both the length and the capacity to exactly the count requested.
//! -   `clear` drops all elements and releases the memory.
//!
//! ```
//! use dynvec::vector::Vector;
//!
//! let mut vec: Vector<i32> = Vector::new();
//! assert_eq!(0, vec.capacity());
//!
//! vec.reserve(10);
//! assert_eq!(10, vec.capacity());
//!
//! vec.assign(5, 7);
//! assert_eq!(&[7, 7, 7, 7, 7], vec.as_slice());
//! assert_eq!(5, vec.capacity());
//!
//! vec.resize(6);
//! assert_eq!(&[7, 7, 7, 7, 7, 0], vec.as_slice());
//! assert_eq!(6, vec.capacity());
//!
//! vec.clear();
//! assert_eq!(0, vec.len());
//! assert_eq!(0, vec.capacity());
//! ```
//!
//! #   Example: handling failures
//!
//! Failures distinguish between arguments being rejected and memory being exhausted; in either case, the `Vector`
//! is left untouched.
//!
//! ```
//! use dynvec::failure::{Failure, FailureKind};
//! use dynvec::vector::Vector;
//!
//! let mut vec: Vector<i32> = Vector::new();
//! vec.push_back(1);
//!
//! //  Inserting before the end is not appending.
//! let failure = vec.try_insert(1, 2).unwrap_err();
//! assert_eq!(Failure::OutOfBounds, failure);
//! assert_eq!(FailureKind::Precondition, failure.kind());
//!
//! let failure = vec.try_reserve(usize::MAX).unwrap_err();
//! assert_eq!(Failure::BytesOverflow, failure);
//! assert_eq!(FailureKind::Allocation, failure.kind());
//!
//! assert_eq!(&[1], vec.as_slice());
//! ```

mod buffer;
mod capacity;
mod hooks;
mod vector;

pub use self::capacity::{DEFAULT_CAPACITY, SCALING_FACTOR};
pub use self::hooks::VectorHooks;
pub use self::vector::Vector;

#[cfg(feature = "with-std")]
pub use self::hooks::DefaultVectorHooks;

use super::allocator;
use super::failure;
use super::raw;
use super::root;
