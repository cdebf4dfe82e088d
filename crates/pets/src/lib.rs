//! Pets: named, four-legged household animals.
//!
//! These types know nothing about the demos that use them. Any capability a
//! demo needs (walking, sitting, ...) is declared by that demo and implemented
//! there, for these types.

pub mod pet;

pub use pet::{Cat, Dog};
