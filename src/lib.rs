#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The DynVec Library
//!
//! A resizable array, with faillible operations and pluggable allocation.
//! -   The `Vector`: a contiguous, growable, array.
//!
//! Every operation which may allocate, or which takes an index, reports failures as a `Failure`, distinguishing
//! exhausted memory from rejected arguments.

pub mod allocator;
pub mod failure;
pub mod vector;

mod utils;

use self::utils::raw;
use self::utils::root;
