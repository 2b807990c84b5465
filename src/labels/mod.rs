pub(crate) mod components;
mod logic;
mod systems;

use crate::core::frame::FrameSet;
use crate::labels::systems::*;
use bevy::prelude::*;

/// 2D text labels pinned to points in the 3D scene, drawn over the 3D image.
pub struct LabelsPlugin;

impl Plugin for LabelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                despawn_orphaned_overlays,
                spawn_label_overlays,
                sync_label_text,
                project_label_overlays,
            )
                .chain()
                .in_set(FrameSet::Labels),
        );
    }
}
