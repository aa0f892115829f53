//! Color error types

use thiserror::Error;

/// Errors that can occur when parsing colors or gradients
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Nothing but whitespace was given
    #[error("empty color string")]
    Empty,

    /// The input is not a hex color, color function or name
    #[error("invalid color syntax: `{input}`")]
    Syntax { input: String },

    /// Looked like a color name but is not one
    #[error("unknown color name: `{name}`")]
    UnknownName { name: String },

    /// Malformed `linear-gradient(...)` expression
    #[error("invalid linear gradient `{input}`: {reason}")]
    Gradient { input: String, reason: String },

    /// Structured gradient with a NaN or infinite angle or stop position
    #[error("linear gradient {field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Result type for tinct_core operations
pub type Result<T> = std::result::Result<T, ColorError>;
