//! Ordered map and set stored as a sorted contiguous vector.
//!
//! Lookups are binary searches, iteration is a linear scan over one allocation.
//! Inserting or removing shifts the tail, so prefer building from an iterator
//! for batch loads.

mod compare;
pub use compare::*;

mod map;
pub use map::*;

mod set;
pub use set::*;

pub mod iterator;
pub mod search;

#[cfg(feature = "serde")]
mod serde_impl;
