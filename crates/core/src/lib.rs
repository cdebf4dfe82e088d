//! `critters-core` — building blocks shared by the demo crates.
//!
//! This crate holds no demo behavior of its own, only the error model every
//! output-writing operation reports through.

pub mod error;

pub use error::{DemoError, DemoResult};
