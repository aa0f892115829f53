//! Interpolation primitives
//!
//! Scalar and per-channel color interpolation, plus the [`Interpolate`]
//! trait that lifts them onto gradient stops and whole gradients.
//!
//! # Rounding
//!
//! Every interpolated number is rounded half-up: `floor(x + 0.5)`. Halfway
//! between `0` and `255` is therefore `128`, and a fill halfway between
//! `#000000` and `#ffffff` is `#808080`. The same rule applies to angles and
//! stop positions, so interpolated values are always whole numbers.

use tinct_core::{Color, LinearColorStop, LinearGradient};

/// Linearly interpolate two numbers and round the result half-up
///
/// `delta` is not clamped: values outside `[0, 1]` extrapolate.
pub fn lerp_scalar(start: f64, end: f64, delta: f64) -> f64 {
    (start + (end - start) * delta + 0.5).floor()
}

/// Interpolate each channel of two colors independently
///
/// Results are clamped to the channel range, which only matters when
/// `delta` extrapolates past either end.
pub fn lerp_color(start: &Color, end: &Color, delta: f64) -> Color {
    let start = start.channels();
    let end = end.channels();
    let mut channels = [0u8; 4];

    for (out, (a, b)) in channels.iter_mut().zip(start.iter().zip(end.iter())) {
        *out = lerp_scalar(f64::from(*a), f64::from(*b), delta).clamp(0.0, 255.0) as u8;
    }

    Color::from_channels(channels)
}

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Interpolate between self and other by `delta` (0.0 to 1.0)
    fn lerp(&self, other: &Self, delta: f64) -> Self;
}

// ============================================================================
// Scalar / Color
// ============================================================================

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, delta: f64) -> Self {
        lerp_scalar(*self, *other, delta)
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, delta: f64) -> Self {
        lerp_color(self, other, delta)
    }
}

// ============================================================================
// Gradients
// ============================================================================

impl Interpolate for LinearColorStop<Color> {
    fn lerp(&self, other: &Self, delta: f64) -> Self {
        LinearColorStop::new(
            self.length_percentage.lerp(&other.length_percentage, delta),
            self.color.lerp(&other.color, delta),
        )
    }
}

/// Stops are paired by index. Callers must ensure both stop lists have the
/// same length; surplus stops on the longer side are dropped.
impl Interpolate for LinearGradient<Color> {
    fn lerp(&self, other: &Self, delta: f64) -> Self {
        LinearGradient::new(
            self.angle.lerp(&other.angle, delta),
            self.stop_list
                .iter()
                .zip(other.stop_list.iter())
                .map(|(start, end)| start.lerp(end, delta)),
        )
    }
}
