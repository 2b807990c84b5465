use crate::color::Rgb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bottom and top colors of a rack. The shader receives them as
/// `color1` (bottom) and `color2` (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientColors {
    pub bottom: Rgb,
    pub top: Rgb,
}

impl GradientColors {
    pub const fn new(bottom: Rgb, top: Rgb) -> Self {
        Self { bottom, top }
    }

    pub const fn uniform(color: Rgb) -> Self {
        Self {
            bottom: color,
            top: color,
        }
    }

    /// Linear color the gradient shader produces at local height `local_y`.
    pub fn color_at(&self, local_y: f32) -> Vec3 {
        blend(self.bottom.to_linear(), self.top.to_linear(), local_y)
    }
}

/// Interpolation factor for a box whose local y spans [-1, 1].
pub fn mix_factor(local_y: f32) -> f32 {
    (local_y + 1.0) / 2.0
}

/// Same as the fragment stage: `mix(color1, color2, (y + 1) / 2)`.
pub fn blend(color1: Vec3, color2: Vec3, local_y: f32) -> Vec3 {
    color1.lerp(color2, mix_factor(local_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(-0.5, 0.25)]
    #[case(0.0, 0.5)]
    #[case(0.5, 0.75)]
    #[case(1.0, 1.0)]
    fn test_mix_factor(#[case] local_y: f32, #[case] expected: f32) {
        assert!((mix_factor(local_y) - expected).abs() < 1e-6);
    }

    #[rstest]
    #[case(Rgb::BLUE, Rgb::GREEN)]
    #[case(Rgb::GREEN, Rgb::BLUE)]
    #[case(Rgb::from_hex(0xaaaaaa), Rgb::from_hex(0xaaaaaa))]
    #[case(Rgb::from_hex(0x123456), Rgb::from_hex(0xfedcba))]
    fn test_blend_endpoints_and_midpoint(#[case] bottom: Rgb, #[case] top: Rgb) {
        let colors = GradientColors::new(bottom, top);
        let (c1, c2) = (bottom.to_linear(), top.to_linear());

        assert_eq!(colors.color_at(-1.0), c1);
        assert!((colors.color_at(1.0) - c2).abs().max_element() < 1e-6);
        assert!((colors.color_at(0.0) - (c1 + c2) / 2.0).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_uniform_gradient_is_flat() {
        let gray = GradientColors::uniform(Rgb::from_hex(0xaaaaaa));
        let expected = gray.bottom.to_linear();
        for y in [-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert!((gray.color_at(y) - expected).abs().max_element() < 1e-6);
        }
    }
}
