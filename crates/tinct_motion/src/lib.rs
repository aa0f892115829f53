//! Tinct Motion Engine
//!
//! Interpolates color-valued properties (solid fills and linear gradients)
//! between a start and an end value as an externally driven progress value
//! advances from 0 to 1.
//!
//! # Features
//!
//! - **Interpolation primitives**: rounded scalar and per-channel color lerp
//! - **Three-phase steps**: exact start/end values, interpolated in between
//! - **Gradient motions**: pairwise stop interpolation with construction-time
//!   stop-count validation
//! - **Appliers**: CSS `background`, SVG `<linearGradient>` and `fill`
//! - **Render target seam**: motions write through [`RenderTarget`], so they
//!   can be driven against [`MemoryTarget`] in tests
//!
//! Scheduling, easing and composition belong to the host.
//!
//! # Example
//!
//! ```rust
//! use tinct_motion::{ColorMotion, FillMotion, MemoryTarget, MotionParams};
//!
//! let motion = FillMotion::new("#000000", "#ffffff").unwrap();
//! let mut target = MemoryTarget::new();
//!
//! motion.on_update(MotionParams::new(&mut target, 0.5));
//! assert_eq!(target.style("fill"), Some("#808080"));
//!
//! motion.turn_off(&mut target);
//! assert!(target.is_pristine());
//! ```

pub mod any;
pub mod background;
pub mod error;
pub mod fill;
pub mod gradient;
pub mod motion;
pub mod svg;
pub mod target;
pub mod values;

pub use any::{AnyMotion, GradientInput, MotionSpec};
pub use background::{css_linear_gradient, BackgroundGradient, BackgroundLinearGradientMotion};
pub use error::{MotionError, Result};
pub use fill::FillMotion;
pub use gradient::{GradientApplier, LinearGradientMotion};
pub use motion::{ColorMotion, Endpoints, MotionParams};
pub use svg::{SvgGradient, SvgLinearGradientMotion};
pub use target::{ElementNode, MemoryTarget, RenderTarget, SVG_NAMESPACE};
pub use values::{lerp_color, lerp_scalar, Interpolate};

pub use tinct_core::{
    Color, ColorError, ExternalLinearGradient, LinearColorStop, LinearGradient,
    ResolvedLinearGradient,
};
