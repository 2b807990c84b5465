pub(crate) mod components;
pub(crate) mod logic;
pub(crate) mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use crate::core::frame::FrameSet;
use crate::core::state::FrameLoopState;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .add_message::<CameraChanged>()
            .add_systems(
                Update,
                collect_orbit_input.run_if(in_state(FrameLoopState::Running)),
            )
            .add_systems(PostUpdate, update_orbit_cameras.in_set(FrameSet::Controls));
    }
}
