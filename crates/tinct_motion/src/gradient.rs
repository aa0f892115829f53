//! Linear-gradient motions
//!
//! [`LinearGradientMotion`] holds the gradient-specific logic shared by every
//! gradient target: resolving stop colors, checking that start and end have
//! the same number of stops, and interpolating stop by stop. Writing the
//! result onto an element is left to a [`GradientApplier`].

use tinct_core::{ExternalLinearGradient, ResolvedLinearGradient};
use tracing::debug;

use crate::error::{MotionError, Result};
use crate::motion::{ColorMotion, Endpoints, MotionParams};
use crate::target::RenderTarget;

/// Writes a resolved gradient onto a specific kind of target
pub trait GradientApplier {
    /// Name of the motion built on this applier
    const NAME: &'static str;

    fn make_step(&self, element: &mut dyn RenderTarget, gradient: &ResolvedLinearGradient);

    fn turn_off(&self, element: &mut dyn RenderTarget);
}

/// Motion between two linear gradients
///
/// Stops are interpolated pairwise by index: stop `i` of the start gradient
/// moves towards stop `i` of the end gradient, position and color alike.
/// Both gradients must therefore have the same number of stops; this is
/// checked at construction.
#[derive(Clone, Debug)]
pub struct LinearGradientMotion<A> {
    values: Endpoints<ResolvedLinearGradient>,
    applier: A,
}

impl<A: GradientApplier + Default> LinearGradientMotion<A> {
    pub fn new(start: &ExternalLinearGradient, end: &ExternalLinearGradient) -> Result<Self> {
        Self::with_applier(A::default(), start, end)
    }
}

impl<A: GradientApplier> LinearGradientMotion<A> {
    pub fn with_applier(
        applier: A,
        start: &ExternalLinearGradient,
        end: &ExternalLinearGradient,
    ) -> Result<Self> {
        let values = Endpoints::resolve(start, end, <Self as ColorMotion>::resolve)?;

        if values.start.len() != values.end.len() {
            return Err(MotionError::StopListMismatch {
                motion: A::NAME,
                start: values.start.len(),
                end: values.end.len(),
            });
        }

        debug!(
            motion = A::NAME,
            stops = values.start.len(),
            "created linear gradient motion"
        );

        Ok(Self { values, applier })
    }

    pub fn start(&self) -> &ResolvedLinearGradient {
        &self.values.start
    }

    pub fn end(&self) -> &ResolvedLinearGradient {
        &self.values.end
    }

    pub fn applier(&self) -> &A {
        &self.applier
    }
}

impl<A: GradientApplier> ColorMotion for LinearGradientMotion<A> {
    type Input = ExternalLinearGradient;
    type Resolved = ResolvedLinearGradient;

    fn name(&self) -> &'static str {
        A::NAME
    }

    fn resolve(input: &ExternalLinearGradient) -> Result<ResolvedLinearGradient> {
        Ok(input.resolve()?)
    }

    fn endpoints(&self) -> &Endpoints<ResolvedLinearGradient> {
        &self.values
    }

    fn on_start(&self, params: MotionParams<'_>) {
        self.applier.make_step(params.element, &self.values.start);
    }

    fn on_end(&self, params: MotionParams<'_>) {
        self.applier.make_step(params.element, &self.values.end);
    }

    fn on_update(&self, params: MotionParams<'_>) {
        let gradient = self.value_at(params.delta);
        self.applier.make_step(params.element, &gradient);
    }

    fn turn_off(&self, element: &mut dyn RenderTarget) {
        debug!(motion = A::NAME, "turning off");
        self.applier.turn_off(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::MemoryTarget;
    use tinct_core::{Color, LinearColorStop, LinearGradient};

    /// Records the last gradient it was asked to apply
    #[derive(Debug, Default)]
    struct Capture;

    impl GradientApplier for Capture {
        const NAME: &'static str = "CaptureMotion";

        fn make_step(&self, element: &mut dyn RenderTarget, gradient: &ResolvedLinearGradient) {
            let stops: Vec<String> = gradient
                .stop_list
                .iter()
                .map(|stop| format!("{}@{}", stop.color, stop.length_percentage))
                .collect();
            element.set_style("capture", &format!("{}|{}", gradient.angle, stops.join(",")));
        }

        fn turn_off(&self, element: &mut dyn RenderTarget) {
            element.remove_style("capture");
        }
    }

    fn gradient(angle: f64, stops: &[(f64, &str)]) -> ExternalLinearGradient {
        LinearGradient::new(
            angle,
            stops
                .iter()
                .map(|&(position, color)| LinearColorStop::new(position, color.to_string())),
        )
    }

    #[test]
    fn test_mismatched_stop_lists_fail() {
        let start = gradient(0.0, &[(0.0, "red"), (100.0, "blue")]);
        let end = gradient(0.0, &[(0.0, "red"), (50.0, "green"), (100.0, "blue")]);

        let err = LinearGradientMotion::<Capture>::new(&start, &end).unwrap_err();
        assert_eq!(
            err,
            MotionError::StopListMismatch {
                motion: "CaptureMotion",
                start: 2,
                end: 3,
            }
        );
        assert!(err.to_string().contains("CaptureMotion"));
    }

    #[test]
    fn test_bad_color_fails_construction() {
        let start = gradient(0.0, &[(0.0, "red"), (100.0, "bleu")]);
        let end = gradient(0.0, &[(0.0, "red"), (100.0, "blue")]);

        assert!(matches!(
            LinearGradientMotion::<Capture>::new(&start, &end),
            Err(MotionError::Color(_))
        ));
    }

    #[test]
    fn test_boundaries_apply_literal_values() {
        let start = gradient(12.4, &[(0.3, "#010203"), (99.6, "white")]);
        let end = gradient(80.0, &[(10.0, "black"), (90.0, "#0a0b0c")]);
        let motion = LinearGradientMotion::<Capture>::new(&start, &end).unwrap();
        let mut target = MemoryTarget::new();

        motion.on_start(MotionParams::new(&mut target, 0.0));
        assert_eq!(target.style("capture"), Some("12.4|#010203@0.3,#ffffff@99.6"));

        motion.on_end(MotionParams::new(&mut target, 1.0));
        assert_eq!(target.style("capture"), Some("80|#000000@10,#0a0b0c@90"));
    }

    #[test]
    fn test_update_interpolates_pairwise() {
        let start = gradient(0.0, &[(0.0, "red"), (100.0, "blue")]);
        let end = gradient(90.0, &[(10.0, "blue"), (90.0, "red")]);
        let motion = LinearGradientMotion::<Capture>::new(&start, &end).unwrap();

        let mid = motion.value_at(0.5);
        assert_eq!(mid.angle, 45.0);
        assert_eq!(mid.stop_list[0].length_percentage, 5.0);
        assert_eq!(mid.stop_list[0].color, Color::rgb(128, 0, 128));
        assert_eq!(mid.stop_list[1].length_percentage, 95.0);
        assert_eq!(mid.stop_list[1].color, Color::rgb(128, 0, 128));
    }

    #[test]
    fn test_turn_off_before_any_step() {
        let start = gradient(0.0, &[(0.0, "red"), (100.0, "blue")]);
        let motion = LinearGradientMotion::<Capture>::new(&start, &start).unwrap();
        let mut target = MemoryTarget::new();

        motion.turn_off(&mut target);
        motion.turn_off(&mut target);
        assert!(target.is_pristine());
    }
}
