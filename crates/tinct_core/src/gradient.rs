//! Linear gradient data model
//!
//! A gradient is generic over its stop color type. The external form uses
//! the color strings a caller writes (`LinearGradient<String>`). The internal
//! form holds parsed [`Color`] values (`LinearGradient<Color>`) and is the one
//! motions interpolate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Color;
use crate::error::ColorError;

/// Gradients rarely carry more than a handful of stops
pub type StopList<C> = SmallVec<[LinearColorStop<C>; 4]>;

/// A color at a position along the gradient axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearColorStop<C> {
    /// Position along the gradient axis, in percent (0 to 100)
    #[serde(alias = "lengthPercentage")]
    pub length_percentage: f64,
    pub color: C,
}

impl<C> LinearColorStop<C> {
    pub fn new(length_percentage: f64, color: C) -> Self {
        Self {
            length_percentage,
            color,
        }
    }
}

/// A linear gradient: an angle and an ordered list of stops
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient<C> {
    /// Direction in degrees
    pub angle: f64,
    #[serde(alias = "stopList")]
    pub stop_list: StopList<C>,
}

impl<C> LinearGradient<C> {
    pub fn new(angle: f64, stop_list: impl IntoIterator<Item = LinearColorStop<C>>) -> Self {
        Self {
            angle,
            stop_list: stop_list.into_iter().collect(),
        }
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        self.stop_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_list.is_empty()
    }
}

/// Stop as written by a caller
pub type ExternalColorStop = LinearColorStop<String>;
/// Gradient as written by a caller
pub type ExternalLinearGradient = LinearGradient<String>;
/// Stop with its color parsed
pub type ResolvedColorStop = LinearColorStop<Color>;
/// Gradient with every stop color parsed
pub type ResolvedLinearGradient = LinearGradient<Color>;

impl LinearGradient<String> {
    /// Parse every stop color. Angle and positions pass through unchanged
    /// but must be finite.
    pub fn resolve(&self) -> Result<ResolvedLinearGradient, ColorError> {
        if !self.angle.is_finite() {
            return Err(ColorError::NonFinite { field: "angle" });
        }

        let stop_list = self
            .stop_list
            .iter()
            .map(|stop| {
                if !stop.length_percentage.is_finite() {
                    return Err(ColorError::NonFinite {
                        field: "stop position",
                    });
                }
                Color::parse(&stop.color)
                    .map(|color| LinearColorStop::new(stop.length_percentage, color))
            })
            .collect::<Result<StopList<Color>, ColorError>>()?;

        Ok(LinearGradient {
            angle: self.angle,
            stop_list,
        })
    }
}

impl FromStr for LinearGradient<String> {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_linear_gradient(s)
    }
}
