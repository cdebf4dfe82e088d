//! Diagnostics for the demo binaries.
//!
//! Demo lines are the only thing a binary writes to stdout. Everything this
//! crate sets up (structured events, filtering) is routed to stderr.

/// Install the stderr JSON subscriber for the current process.
///
/// Call it first thing in `main`. A second call leaves the first subscriber
/// in place.
pub fn init() {
    tracing::init();
}

/// Subscriber construction and the default filter.
pub mod tracing;
