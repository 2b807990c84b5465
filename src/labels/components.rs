use bevy::prelude::*;
use racklayout::layout::TemperatureLabel;

/// 3D point a label hangs from. Lives under its rack so it follows the rack around.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    pub text: String,
}

impl From<&TemperatureLabel> for LabelAnchor {
    fn from(label: &TemperatureLabel) -> Self {
        Self { text: label.text() }
    }
}

/// Anchor already has its overlay node.
#[derive(Component, Debug, Clone, Copy)]
pub struct HasOverlay(pub Entity);

/// UI node that displays an anchor's text.
#[derive(Component, Debug, Clone, Copy)]
pub struct LabelOverlay {
    pub anchor: Entity,
}

/// Full-viewport UI node all overlay labels are placed in.
#[derive(Component, Debug, Default)]
pub struct LabelOverlayRoot;
