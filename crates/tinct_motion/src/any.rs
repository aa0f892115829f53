//! Motion selection
//!
//! [`MotionSpec`] is a serializable description of a motion (which target
//! kind plus start and end values). [`MotionSpec::build`] turns it into an
//! [`AnyMotion`], a tagged union over the concrete motions that forwards the
//! step protocol to whichever variant it holds.

use serde::{Deserialize, Serialize};
use tinct_core::{ColorError, ExternalLinearGradient};

use crate::background::BackgroundLinearGradientMotion;
use crate::error::Result;
use crate::fill::FillMotion;
use crate::motion::{ColorMotion, MotionParams};
use crate::svg::SvgLinearGradientMotion;
use crate::target::RenderTarget;

/// A gradient endpoint, either as CSS text or as an explicit structure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientInput {
    /// `linear-gradient(...)` text
    Css(String),
    Gradient(ExternalLinearGradient),
}

impl GradientInput {
    pub fn to_gradient(&self) -> std::result::Result<ExternalLinearGradient, ColorError> {
        match self {
            GradientInput::Css(css) => css.parse(),
            GradientInput::Gradient(gradient) => Ok(gradient.clone()),
        }
    }
}

impl From<ExternalLinearGradient> for GradientInput {
    fn from(gradient: ExternalLinearGradient) -> Self {
        GradientInput::Gradient(gradient)
    }
}

/// Serializable motion description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MotionSpec {
    Fill {
        start: String,
        end: String,
    },
    BackgroundGradient {
        start: GradientInput,
        end: GradientInput,
    },
    SvgGradient {
        start: GradientInput,
        end: GradientInput,
    },
}

impl MotionSpec {
    /// Resolve the description into a ready-to-step motion
    pub fn build(&self) -> Result<AnyMotion> {
        let motion = match self {
            MotionSpec::Fill { start, end } => AnyMotion::Fill(FillMotion::new(start, end)?),
            MotionSpec::BackgroundGradient { start, end } => AnyMotion::BackgroundGradient(
                BackgroundLinearGradientMotion::new(&start.to_gradient()?, &end.to_gradient()?)?,
            ),
            MotionSpec::SvgGradient { start, end } => AnyMotion::SvgGradient(
                SvgLinearGradientMotion::new(&start.to_gradient()?, &end.to_gradient()?)?,
            ),
        };
        Ok(motion)
    }
}

/// Any of the concrete color motions
#[derive(Clone, Debug)]
pub enum AnyMotion {
    Fill(FillMotion),
    BackgroundGradient(BackgroundLinearGradientMotion),
    SvgGradient(SvgLinearGradientMotion),
}

macro_rules! dispatch {
    ($self:expr, $motion:ident => $body:expr) => {
        match $self {
            AnyMotion::Fill($motion) => $body,
            AnyMotion::BackgroundGradient($motion) => $body,
            AnyMotion::SvgGradient($motion) => $body,
        }
    };
}

impl AnyMotion {
    pub fn name(&self) -> &'static str {
        dispatch!(self, motion => motion.name())
    }

    pub fn on_start(&self, params: MotionParams<'_>) {
        dispatch!(self, motion => motion.on_start(params))
    }

    pub fn on_end(&self, params: MotionParams<'_>) {
        dispatch!(self, motion => motion.on_end(params))
    }

    pub fn on_update(&self, params: MotionParams<'_>) {
        dispatch!(self, motion => motion.on_update(params))
    }

    pub fn step(&self, params: MotionParams<'_>) {
        dispatch!(self, motion => motion.step(params))
    }

    pub fn turn_off(&self, element: &mut dyn RenderTarget) {
        dispatch!(self, motion => motion.turn_off(element))
    }
}

impl From<FillMotion> for AnyMotion {
    fn from(motion: FillMotion) -> Self {
        AnyMotion::Fill(motion)
    }
}

impl From<BackgroundLinearGradientMotion> for AnyMotion {
    fn from(motion: BackgroundLinearGradientMotion) -> Self {
        AnyMotion::BackgroundGradient(motion)
    }
}

impl From<SvgLinearGradientMotion> for AnyMotion {
    fn from(motion: SvgLinearGradientMotion) -> Self {
        AnyMotion::SvgGradient(motion)
    }
}
