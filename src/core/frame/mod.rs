mod systems;

use crate::core::camera::systems::update_orbit_cameras;
use crate::core::context::SceneContext;
use crate::core::frame::systems::*;
use crate::core::state::FrameLoopState;
use bevy::prelude::*;
use bevy::transform::TransformSystems;
use bevy::ui::UiSystems;
use bevy::window::{RequestRedraw, WindowResized};

/// Per-frame passes, run in this order every tick once the loop is running.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Camera controls and their damping.
    Controls,
    /// 3D scene state consumed by the renderer.
    Scene,
    /// Label overlay, composited over the 3D image.
    Labels,
}

pub(crate) struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<FrameLoopState>()
            .add_message::<WindowResized>()
            .add_message::<RequestRedraw>()
            .configure_sets(
                PostUpdate,
                (
                    FrameSet::Controls.before(TransformSystems::Propagate),
                    FrameSet::Scene
                        .after(FrameSet::Controls)
                        .before(TransformSystems::Propagate),
                    // overlay nodes must be placed before UI layout reads them
                    FrameSet::Labels
                        .after(FrameSet::Scene)
                        .before(TransformSystems::Propagate)
                        .before(UiSystems::Layout),
                ),
            )
            .configure_sets(
                PostUpdate,
                (FrameSet::Controls, FrameSet::Scene, FrameSet::Labels)
                    .run_if(in_state(FrameLoopState::Running)),
            )
            .add_systems(
                PostUpdate,
                request_redraw_on_camera_change
                    .in_set(FrameSet::Controls)
                    .after(update_orbit_cameras),
            )
            .add_systems(
                PreUpdate,
                handle_window_resize.run_if(resource_exists::<SceneContext>),
            )
            .add_systems(OnEnter(FrameLoopState::Running), log_loop_started);
    }
}

fn log_loop_started() {
    info!("Frame loop running");
}
