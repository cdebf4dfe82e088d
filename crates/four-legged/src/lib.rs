//! Four-legged demo.
//!
//! One capability trait, [`FourLegged`], implemented for the pets from
//! `critters-pets`, and one function, [`demo`], that drives any of them.

pub mod capability;
pub mod demo;

pub use capability::FourLegged;
pub use demo::{demo, run};
