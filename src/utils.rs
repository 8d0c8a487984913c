//! Internal building blocks.

pub mod raw;
pub mod root;

#[cfg(test)]
pub mod tester;
