//! Demo error model.

use thiserror::Error;

/// Result type used by every operation that writes demo output.
pub type DemoResult<T> = Result<T, DemoError>;

/// Demo-level error.
///
/// The demos themselves are total; the only thing that can fail is the sink
/// their lines are written to.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing a line to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl DemoError {
    /// Whether the failure came from the reader hanging up (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Output(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}
