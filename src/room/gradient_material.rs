use crate::helpers::color::to_linear_rgba;
use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;
use racklayout::gradient::GradientColors;

pub const RACK_GRADIENT_SHADER: &str = "shaders/rack_gradient.wgsl";

/// Unlit vertical gradient over a box whose local y spans [-1, 1].
/// `color1` is the bottom color, `color2` the top one.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct RackGradientMaterial {
    #[uniform(0)]
    pub color1: LinearRgba,
    #[uniform(1)]
    pub color2: LinearRgba,
}

impl RackGradientMaterial {
    pub fn set_colors(&mut self, colors: &GradientColors) {
        self.color1 = to_linear_rgba(colors.bottom);
        self.color2 = to_linear_rgba(colors.top);
    }
}

impl From<&GradientColors> for RackGradientMaterial {
    fn from(colors: &GradientColors) -> Self {
        Self {
            color1: to_linear_rgba(colors.bottom),
            color2: to_linear_rgba(colors.top),
        }
    }
}

impl Material for RackGradientMaterial {
    fn vertex_shader() -> ShaderRef {
        RACK_GRADIENT_SHADER.into()
    }

    fn fragment_shader() -> ShaderRef {
        RACK_GRADIENT_SHADER.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use racklayout::color::Rgb;

    #[test]
    fn test_bottom_color_is_color1() {
        let material = RackGradientMaterial::from(&GradientColors::new(Rgb::BLUE, Rgb::GREEN));
        let close = |a: LinearRgba, b: LinearRgba| {
            [a.red - b.red, a.green - b.green, a.blue - b.blue, a.alpha - b.alpha]
                .iter()
                .all(|d| d.abs() < 1e-6)
        };
        assert!(close(material.color1, LinearRgba::rgb(0.0, 0.0, 1.0)));
        assert!(close(material.color2, LinearRgba::rgb(0.0, 1.0, 0.0)));
    }
}
