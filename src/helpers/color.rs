use bevy::color::{Color, LinearRgba};
use racklayout::color::Rgb;

pub fn to_color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.r, rgb.g, rgb.b)
}

/// Goes through the same conversion the CPU-side gradient math uses.
pub fn to_linear_rgba(rgb: Rgb) -> LinearRgba {
    let linear = rgb.to_linear();
    LinearRgba::rgb(linear.x, linear.y, linear.z)
}
