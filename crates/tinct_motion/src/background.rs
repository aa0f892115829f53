//! Background gradient motion
//!
//! Writes the gradient as a CSS `linear-gradient()` into the target's
//! `background` style property.

use tinct_core::ResolvedLinearGradient;

use crate::gradient::{GradientApplier, LinearGradientMotion};
use crate::target::RenderTarget;

/// Style property written by [`BackgroundLinearGradientMotion`]
pub const BACKGROUND_PROPERTY: &str = "background";

/// Serialize a gradient as `linear-gradient(<angle>deg, <color> <pos>%, ...)`
pub fn css_linear_gradient(gradient: &ResolvedLinearGradient) -> String {
    let stops: Vec<String> = gradient
        .stop_list
        .iter()
        .map(|stop| format!("{} {}%", stop.color.to_hex(), stop.length_percentage))
        .collect();

    format!("linear-gradient({}deg, {})", gradient.angle, stops.join(", "))
}

/// Applier for the CSS `background` property
#[derive(Clone, Copy, Debug, Default)]
pub struct BackgroundGradient;

impl GradientApplier for BackgroundGradient {
    const NAME: &'static str = "BackgroundLinearGradientMotion";

    fn make_step(&self, element: &mut dyn RenderTarget, gradient: &ResolvedLinearGradient) {
        element.set_style(BACKGROUND_PROPERTY, &css_linear_gradient(gradient));
    }

    fn turn_off(&self, element: &mut dyn RenderTarget) {
        element.remove_style(BACKGROUND_PROPERTY);
    }
}

/// Animates an element's `background` between two linear gradients
pub type BackgroundLinearGradientMotion = LinearGradientMotion<BackgroundGradient>;
