use crate::core::state::FrameLoopState;
use crate::room::gradient_material::RACK_GRADIENT_SHADER;
use bevy::prelude::*;
use bevy::shader::Shader;
use bevy_asset_loader::prelude::*;

/// Holds the frame loop in `Idle` until the rack shader is loaded.
pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_loading_state(
            LoadingState::new(FrameLoopState::Idle)
                .continue_to_state(FrameLoopState::Running)
                .load_collection::<ShaderAssets>(),
        );
    }
}

#[derive(AssetCollection, Resource)]
pub struct ShaderAssets {
    #[asset(path = "shaders/rack_gradient.wgsl")]
    pub rack_gradient: Handle<Shader>,
}
