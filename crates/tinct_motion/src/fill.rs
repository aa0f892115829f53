//! Fill color motion

use tinct_core::Color;
use tracing::debug;

use crate::error::Result;
use crate::motion::{ColorMotion, Endpoints, MotionParams};
use crate::target::RenderTarget;

/// Style property written by [`FillMotion`]
pub const FILL_PROPERTY: &str = "fill";

/// Animates an element's `fill` between two solid colors
#[derive(Clone, Debug, PartialEq)]
pub struct FillMotion {
    values: Endpoints<Color>,
}

impl FillMotion {
    pub const NAME: &'static str = "FillMotion";

    pub fn new(start: &str, end: &str) -> Result<Self> {
        let values = Endpoints::resolve(&start.to_string(), &end.to_string(), Self::resolve)?;
        debug!(
            motion = Self::NAME,
            start = %values.start,
            end = %values.end,
            "created fill motion"
        );
        Ok(Self { values })
    }

    /// Build from already parsed colors
    pub fn from_colors(start: Color, end: Color) -> Self {
        Self {
            values: Endpoints { start, end },
        }
    }

    pub fn start(&self) -> Color {
        self.values.start
    }

    pub fn end(&self) -> Color {
        self.values.end
    }
}

impl ColorMotion for FillMotion {
    type Input = String;
    type Resolved = Color;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolve(input: &String) -> Result<Color> {
        Ok(Color::parse(input)?)
    }

    fn endpoints(&self) -> &Endpoints<Color> {
        &self.values
    }

    fn on_start(&self, params: MotionParams<'_>) {
        params.element.set_style(FILL_PROPERTY, &self.values.start.to_hex());
    }

    fn on_end(&self, params: MotionParams<'_>) {
        params.element.set_style(FILL_PROPERTY, &self.values.end.to_hex());
    }

    fn on_update(&self, params: MotionParams<'_>) {
        let color = self.value_at(params.delta);
        params.element.set_style(FILL_PROPERTY, &color.to_hex());
    }

    fn turn_off(&self, element: &mut dyn RenderTarget) {
        debug!(motion = Self::NAME, "turning off");
        element.remove_style(FILL_PROPERTY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotionError;
    use crate::target::MemoryTarget;

    #[test]
    fn test_fill_midpoint_is_808080() {
        let motion = FillMotion::new("#000000", "#ffffff").unwrap();
        let mut target = MemoryTarget::new();

        motion.on_update(MotionParams::new(&mut target, 0.5));
        assert_eq!(target.style(FILL_PROPERTY), Some("#808080"));
    }

    #[test]
    fn test_fill_boundaries_are_exact() {
        let motion = FillMotion::new("rgba(10, 20, 30, 0.5)", "navy").unwrap();
        let mut target = MemoryTarget::new();

        motion.on_start(MotionParams::new(&mut target, 0.0));
        assert_eq!(target.style(FILL_PROPERTY), Some("#0a141e80"));

        motion.on_end(MotionParams::new(&mut target, 1.0));
        assert_eq!(target.style(FILL_PROPERTY), Some("#000080"));
    }

    #[test]
    fn test_fill_step_dispatch() {
        let motion = FillMotion::from_colors(Color::BLACK, Color::WHITE);
        let mut target = MemoryTarget::new();

        motion.step(MotionParams::new(&mut target, 0.0));
        assert_eq!(target.style(FILL_PROPERTY), Some("#000000"));
        motion.step(MotionParams::new(&mut target, 0.25));
        assert_eq!(target.style(FILL_PROPERTY), Some("#404040"));
        motion.step(MotionParams::new(&mut target, 1.0));
        assert_eq!(target.style(FILL_PROPERTY), Some("#ffffff"));
    }

    #[test]
    fn test_fill_invalid_color() {
        assert!(matches!(
            FillMotion::new("#zzz", "#fff"),
            Err(MotionError::Color(_))
        ));
    }

    #[test]
    fn test_fill_turn_off() {
        let motion = FillMotion::from_colors(Color::BLACK, Color::WHITE);
        let mut target = MemoryTarget::new();

        motion.turn_off(&mut target);
        assert!(target.is_pristine());

        motion.on_update(MotionParams::new(&mut target, 0.5));
        motion.turn_off(&mut target);
        assert!(target.is_pristine());
    }
}
