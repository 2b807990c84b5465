pub mod components;
pub mod gradient_material;
pub mod systems;

use crate::core::frame::FrameSet;
use crate::room::gradient_material::RackGradientMaterial;
use crate::room::systems::*;
use bevy::prelude::*;

/// Floor, wall, lights and the racks.
pub struct RoomPlugin;

impl Plugin for RoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<RackGradientMaterial>::default())
            .add_systems(Startup, build_room)
            .add_systems(PostUpdate, sync_rack_gradients.in_set(FrameSet::Scene));
    }
}
