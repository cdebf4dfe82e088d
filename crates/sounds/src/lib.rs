//! Animal-sound demo.
//!
//! Each animal knows its sound; printing it is the caller's job.

pub mod animal;

pub use animal::{Cat, Dog, Say, announce, run};
