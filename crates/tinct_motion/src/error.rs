//! Motion error types

use thiserror::Error;
use tinct_core::ColorError;

/// Errors raised while constructing a motion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Start and end gradients have different stop counts, so there is no
    /// pairwise interpolation between them
    #[error("Stop-list lengths of linear gradients are not equal in {motion} (start has {start}, end has {end})")]
    StopListMismatch {
        motion: &'static str,
        start: usize,
        end: usize,
    },

    /// A start or end color could not be parsed
    #[error("Color error: {0}")]
    Color(#[from] ColorError),
}

/// Result type for tinct_motion operations
pub type Result<T> = std::result::Result<T, MotionError>;
