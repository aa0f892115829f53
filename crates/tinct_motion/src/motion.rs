//! Color motions
//!
//! A motion animates one color-valued property of a render target from a
//! start value to an end value. The host scheduler owns timing and easing;
//! on every frame it hands the motion a target and an already-eased progress
//! value (`delta`) through one of three step methods:
//!
//! - [`ColorMotion::on_start`] writes the literal start value
//! - [`ColorMotion::on_update`] writes the interpolated value for `0 < delta < 1`
//! - [`ColorMotion::on_end`] writes the literal end value
//!
//! The boundary steps never go through interpolation arithmetic, so progress
//! 0 and 1 always show exactly the configured colors. [`ColorMotion::turn_off`]
//! reverts whatever the motion wrote.
//!
//! Start and end are resolved once at construction and never change, so a
//! motion can be stepped in any order and replayed any number of times.

use tracing::{trace, warn};

use crate::error::Result;
use crate::target::RenderTarget;
use crate::values::Interpolate;

/// Arguments for one step of a motion
pub struct MotionParams<'a> {
    /// Element the step writes to
    pub element: &'a mut dyn RenderTarget,
    /// Eased progress, 0 = start, 1 = end
    pub delta: f64,
}

impl<'a> MotionParams<'a> {
    pub fn new(element: &'a mut dyn RenderTarget, delta: f64) -> Self {
        Self { element, delta }
    }
}

/// Resolved start and end values of a motion
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints<T> {
    pub start: T,
    pub end: T,
}

impl<T> Endpoints<T> {
    /// Resolve both inputs, failing on the first error
    pub fn resolve<I>(start: &I, end: &I, resolve: impl Fn(&I) -> Result<T>) -> Result<Self> {
        Ok(Self {
            start: resolve(start)?,
            end: resolve(end)?,
        })
    }
}

/// An animated transition of a color-valued property
///
/// `Input` is what callers construct the motion from (color strings or a
/// gradient with string stops); `Resolved` is the parsed form the motion
/// interpolates.
pub trait ColorMotion {
    type Input;
    type Resolved: Interpolate;

    /// Motion name used in logs and errors
    fn name(&self) -> &'static str;

    /// Convert an input value into its interpolation-ready form
    fn resolve(input: &Self::Input) -> Result<Self::Resolved>
    where
        Self: Sized;

    fn endpoints(&self) -> &Endpoints<Self::Resolved>;

    /// Apply the start value exactly
    fn on_start(&self, params: MotionParams<'_>);

    /// Apply the end value exactly
    fn on_end(&self, params: MotionParams<'_>);

    /// Apply the value interpolated at `params.delta`
    fn on_update(&self, params: MotionParams<'_>);

    /// Remove whatever this motion writes. Safe to call at any time, any
    /// number of times, including before any step.
    ///
    /// A turned-off motion is finished, but nothing here stops further
    /// steps: the host must not step a motion after calling `turn_off`.
    fn turn_off(&self, element: &mut dyn RenderTarget);

    /// Interpolated value at `delta`, without touching a target
    fn value_at(&self, delta: f64) -> Self::Resolved {
        let endpoints = self.endpoints();
        endpoints.start.lerp(&endpoints.end, delta)
    }

    /// Route one frame to the matching phase: `delta == 0` starts,
    /// `delta == 1` ends, anything else interpolates.
    ///
    /// Deltas outside `[0, 1]` are not rejected; they extrapolate.
    fn step(&self, params: MotionParams<'_>) {
        let delta = params.delta;
        if !(0.0..=1.0).contains(&delta) {
            warn!(motion = self.name(), delta, "delta outside [0, 1], extrapolating");
        }
        trace!(motion = self.name(), delta, "step");

        if delta == 0.0 {
            self.on_start(params);
        } else if delta == 1.0 {
            self.on_end(params);
        } else {
            self.on_update(params);
        }
    }
}
