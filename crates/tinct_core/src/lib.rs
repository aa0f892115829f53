//! Tinct Core
//!
//! Value types shared by the tinct motion engine:
//!
//! - **Color**: an RGBA color with four 8-bit channels and a normalized hex
//!   display form
//! - **Parsing**: CSS hex, `rgb()`/`rgba()` and named colors, plus
//!   `linear-gradient()` expressions
//! - **Gradients**: linear gradients in external (string color) and resolved
//!   (parsed color) form
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Color, ExternalLinearGradient};
//!
//! let color: Color = "rgba(255, 0, 0, 0.5)".parse().unwrap();
//! assert_eq!(color.to_hex(), "#ff000080");
//!
//! let gradient: ExternalLinearGradient = "linear-gradient(90deg, #000 0%, #fff 100%)"
//!     .parse()
//!     .unwrap();
//! let resolved = gradient.resolve().unwrap();
//! assert_eq!(resolved.stop_list[1].color, Color::WHITE);
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod parse;

pub use color::Color;
pub use error::{ColorError, Result};
pub use gradient::{
    ExternalColorStop, ExternalLinearGradient, LinearColorStop, LinearGradient,
    ResolvedColorStop, ResolvedLinearGradient, StopList,
};
pub use parse::{named_color, parse_color, parse_linear_gradient};
