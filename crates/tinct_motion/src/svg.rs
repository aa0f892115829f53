//! SVG gradient motion
//!
//! Drives an SVG `<linearGradient>` element: the angle becomes a
//! `gradientTransform` rotation and the stops become `<stop>` children.
//! Children are rebuilt from scratch on every step so no stale stop survives.

use tinct_core::ResolvedLinearGradient;

use crate::gradient::{GradientApplier, LinearGradientMotion};
use crate::target::{ElementNode, RenderTarget};

pub const TRANSFORM_ATTRIBUTE: &str = "gradientTransform";

/// `<stop>` children for a gradient, in stop order
pub fn stop_elements(gradient: &ResolvedLinearGradient) -> Vec<ElementNode> {
    gradient
        .stop_list
        .iter()
        .map(|stop| {
            ElementNode::svg("stop")
                .attr("offset", format!("{}%", stop.length_percentage))
                .attr("stop-color", stop.color.to_hex())
        })
        .collect()
}

/// Applier for SVG `<linearGradient>` elements
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgGradient;

impl GradientApplier for SvgGradient {
    const NAME: &'static str = "SVGLinearGradientMotion";

    fn make_step(&self, element: &mut dyn RenderTarget, gradient: &ResolvedLinearGradient) {
        element.set_attribute(TRANSFORM_ATTRIBUTE, &format!("rotate({})", gradient.angle));
        element.replace_children(stop_elements(gradient));
    }

    fn turn_off(&self, element: &mut dyn RenderTarget) {
        element.remove_attribute(TRANSFORM_ATTRIBUTE);
        element.replace_children(Vec::new());
    }
}

/// Animates an SVG `<linearGradient>` between two gradients
pub type SvgLinearGradientMotion = LinearGradientMotion<SvgGradient>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{ColorMotion, MotionParams};
    use crate::target::{MemoryTarget, SVG_NAMESPACE};
    use tinct_core::ExternalLinearGradient;

    fn motion() -> SvgLinearGradientMotion {
        let start: ExternalLinearGradient =
            "linear-gradient(0deg, red 0%, blue 100%)".parse().unwrap();
        let end: ExternalLinearGradient =
            "linear-gradient(90deg, blue 20%, red 80%)".parse().unwrap();
        SvgLinearGradientMotion::new(&start, &end).unwrap()
    }

    #[test]
    fn test_start_writes_transform_and_stops() {
        let mut target = MemoryTarget::new();
        motion().on_start(MotionParams::new(&mut target, 0.0));

        assert_eq!(target.attribute(TRANSFORM_ATTRIBUTE), Some("rotate(0)"));
        assert_eq!(target.children.len(), 2);

        let first = &target.children[0];
        assert_eq!(first.tag, "stop");
        assert_eq!(first.namespace.as_deref(), Some(SVG_NAMESPACE));
        assert_eq!(first.attribute("offset"), Some("0%"));
        assert_eq!(first.attribute("stop-color"), Some("#ff0000"));
    }

    #[test]
    fn test_steps_replace_children() {
        let motion = motion();
        let mut target = MemoryTarget::new();

        motion.on_start(MotionParams::new(&mut target, 0.0));
        motion.on_update(MotionParams::new(&mut target, 0.5));
        motion.on_end(MotionParams::new(&mut target, 1.0));

        assert_eq!(target.children.len(), 2);
        assert_eq!(target.attribute(TRANSFORM_ATTRIBUTE), Some("rotate(90)"));
        assert_eq!(target.children[0].attribute("offset"), Some("20%"));
        assert_eq!(target.children[1].attribute("stop-color"), Some("#ff0000"));
    }

    #[test]
    fn test_turn_off_clears_transform_and_children() {
        let motion = motion();
        let mut target = MemoryTarget::new();

        motion.on_update(MotionParams::new(&mut target, 0.25));
        assert_eq!(target.attribute(TRANSFORM_ATTRIBUTE), Some("rotate(23)"));

        motion.turn_off(&mut target);
        assert!(target.is_pristine());
    }
}
