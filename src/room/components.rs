use bevy::prelude::*;
use racklayout::gradient::GradientColors;

#[derive(Component, Debug)]
pub struct Floor;

#[derive(Component, Debug)]
pub struct Wall;

/// Group entity owning a rack's box, outline and label anchors.
#[derive(Component, Debug, Clone, Copy)]
pub struct Rack {
    pub index: usize,
}

#[derive(Component, Debug)]
pub struct RackBody;

#[derive(Component, Debug)]
pub struct RackOutline;

/// Colors the rack body's gradient material is kept in sync with.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RackShading(pub GradientColors);
