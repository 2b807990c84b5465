use crate::color::Rgb;
use crate::gradient::GradientColors;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every rack is a 1x2x1 box centered on its origin, so its local y spans [-1, 1].
pub const RACK_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Uniform scale applied to the box of a beveled rack, leaving room for the outline.
pub const BEVEL_BOX_SCALE: f32 = 0.97;

pub const OUTLINE_COLOR: Rgb = Rgb::BLACK;
pub const OUTLINE_OPACITY: f32 = 0.3;

const PLACEHOLDER_GRAY: Rgb = Rgb::from_hex(0xaaaaaa);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RackStyle {
    /// Bare box.
    Plain,
    /// Slightly shrunken box with a translucent edge outline.
    #[default]
    Beveled,
}

impl RackStyle {
    pub fn box_scale(self) -> f32 {
        match self {
            RackStyle::Plain => 1.0,
            RackStyle::Beveled => BEVEL_BOX_SCALE,
        }
    }

    pub fn has_outline(self) -> bool {
        matches!(self, RackStyle::Beveled)
    }
}

/// Where a temperature reading hangs relative to its rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    Top,
    Bottom,
}

impl LabelPosition {
    pub fn offset(self) -> f32 {
        match self {
            LabelPosition::Top => 1.0,
            LabelPosition::Bottom => -1.0,
        }
    }

    pub fn local_translation(self) -> Vec3 {
        Vec3::new(0.0, self.offset(), 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureLabel {
    pub celsius: f32,
    pub position: LabelPosition,
}

impl TemperatureLabel {
    pub fn new(celsius: f32, position: LabelPosition) -> Self {
        Self { celsius, position }
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TemperatureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C", self.celsius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rack {
    pub position: Vec3,
    pub colors: GradientColors,
    pub labels: Vec<TemperatureLabel>,
}

impl Rack {
    pub fn new(position: Vec3, colors: GradientColors) -> Self {
        Self {
            position,
            colors,
            labels: Vec::new(),
        }
    }

    pub fn with_label(mut self, celsius: f32, position: LabelPosition) -> Self {
        self.labels.push(TemperatureLabel::new(celsius, position));
        self
    }

    /// Shorthand for the usual top and bottom reading pair.
    pub fn with_readings(self, top: f32, bottom: f32) -> Self {
        self.with_label(top, LabelPosition::Top)
            .with_label(bottom, LabelPosition::Bottom)
    }

    pub fn size(&self) -> Vec3 {
        RACK_SIZE
    }
}

/// A flat backdrop (floor or wall). Rendered double-sided.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub size: Vec2,
    pub center: Vec3,
    pub normal: Vec3,
    pub color: Rgb,
    /// Unlit surfaces ignore scene lights.
    pub lit: bool,
    pub metallic: f32,
    pub roughness: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HemisphereLight {
    pub sky: Rgb,
    pub ground: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub floor: Surface,
    pub wall: Surface,
    pub light: HemisphereLight,
    pub racks: Vec<Rack>,
}

impl RoomLayout {
    /// The hand-placed server room.
    pub fn server_room() -> Self {
        let blue_to_green = GradientColors::new(Rgb::BLUE, Rgb::GREEN);
        let green_to_blue = GradientColors::new(Rgb::GREEN, Rgb::BLUE);
        let placeholder = GradientColors::uniform(PLACEHOLDER_GRAY);

        Self {
            floor: Surface {
                size: Vec2::new(10.0, 10.0),
                center: Vec3::new(0.0, -1.0, 0.0),
                normal: Vec3::Y,
                color: Rgb::from_hex(0x606060),
                lit: true,
                metallic: 0.5,
                roughness: 0.5,
            },
            wall: Surface {
                size: Vec2::new(10.0, 5.0),
                center: Vec3::new(0.0, 1.5, -5.0),
                normal: Vec3::Z,
                color: Rgb::from_hex(0x808080),
                lit: false,
                metallic: 0.0,
                roughness: 1.0,
            },
            light: HemisphereLight {
                sky: Rgb::WHITE,
                ground: Rgb::from_hex(0x444444),
                intensity: 1.0,
                position: Vec3::new(0.0, 10.0, 0.0),
            },
            racks: vec![
                Rack::new(Vec3::new(2.0, 0.0, -3.0), blue_to_green).with_readings(20.0, 18.0),
                Rack::new(Vec3::new(-2.0, 0.0, -2.0), green_to_blue).with_readings(22.0, 19.0),
                Rack::new(Vec3::new(-2.0, 0.0, 1.0), green_to_blue).with_readings(21.0, 20.0),
                Rack::new(Vec3::new(2.0, 0.0, 1.0), blue_to_green).with_readings(23.0, 22.0),
                Rack::new(Vec3::new(3.0, 0.0, 1.0), placeholder),
                Rack::new(Vec3::new(4.0, 0.0, 1.0), placeholder),
            ],
        }
    }

    pub fn active_racks(&self) -> impl Iterator<Item = &Rack> {
        self.racks.iter().filter(|rack| !rack.labels.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(20.0, "20 °C")]
    #[case(18.0, "18 °C")]
    #[case(21.5, "21.5 °C")]
    #[case(-4.0, "-4 °C")]
    fn test_label_text(#[case] celsius: f32, #[case] expected: &str) {
        let label = TemperatureLabel::new(celsius, LabelPosition::Top);
        assert_eq!(label.text(), expected);
    }

    #[rstest]
    #[case(LabelPosition::Top, Vec3::new(0.0, 1.0, 0.0))]
    #[case(LabelPosition::Bottom, Vec3::new(0.0, -1.0, 0.0))]
    fn test_label_translation(#[case] position: LabelPosition, #[case] expected: Vec3) {
        assert_eq!(position.local_translation(), expected);
    }

    #[test]
    fn test_server_room_has_four_active_and_two_placeholder_racks() {
        let room = RoomLayout::server_room();

        assert_eq!(room.racks.len(), 6);
        assert_eq!(room.active_racks().count(), 4);

        for rack in &room.racks[..4] {
            assert_eq!(rack.labels.len(), 2);
            assert_eq!(rack.labels[0].position, LabelPosition::Top);
            assert_eq!(rack.labels[1].position, LabelPosition::Bottom);
        }
        for rack in &room.racks[4..] {
            assert!(rack.labels.is_empty());
            assert_eq!(rack.colors, GradientColors::uniform(PLACEHOLDER_GRAY));
        }
    }

    #[test]
    fn test_first_rack_matches_reference_scene() {
        let room = RoomLayout::server_room();
        let rack = &room.racks[0];

        assert_eq!(rack.position, Vec3::new(2.0, 0.0, -3.0));
        assert_eq!(rack.colors.bottom, Rgb::BLUE);
        assert_eq!(rack.colors.top, Rgb::GREEN);
        assert_eq!(rack.labels[0].text(), "20 °C");
        assert_eq!(rack.labels[1].text(), "18 °C");
    }

    #[test]
    fn test_label_offsets_stay_within_rack_height() {
        let room = RoomLayout::server_room();
        for rack in &room.racks {
            let half_height = rack.size().y / 2.0;
            for label in &rack.labels {
                assert!(label.position.offset().abs() <= half_height);
            }
        }
    }

    #[test]
    fn test_floor_sits_under_racks() {
        let room = RoomLayout::server_room();
        for rack in &room.racks {
            assert_eq!(rack.position.y - rack.size().y / 2.0, room.floor.center.y);
        }
    }

    #[rstest]
    #[case(RackStyle::Plain, 1.0, false)]
    #[case(RackStyle::Beveled, 0.97, true)]
    fn test_rack_style(#[case] style: RackStyle, #[case] scale: f32, #[case] outline: bool) {
        assert_eq!(style.box_scale(), scale);
        assert_eq!(style.has_outline(), outline);
    }
}
