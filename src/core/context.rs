use crate::core::camera::components::{MainCamera, OrbitCamera};
use crate::core::camera::logic::OrbitSettings;
use crate::core::settings::ViewSettings;
use crate::labels::components::LabelOverlayRoot;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Handles every frame-loop system needs, created once at startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneContext {
    /// Logical size of the drawing surface, shared by the 3D view and the label overlay.
    pub viewport: Vec2,
    pub camera: Entity,
    pub overlay_root: Entity,
}

impl SceneContext {
    pub fn aspect_ratio(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }
}

pub fn spawn_scene_context(
    mut commands: Commands,
    settings: Res<ViewSettings>,
    primary_window: Query<&Window, With<PrimaryWindow>>,
) {
    let viewport = match primary_window.single() {
        Ok(window) => window.size(),
        Err(_) => Vec2::new(settings.window.width as f32, settings.window.height as f32),
    };

    let camera_config = &settings.camera;
    let position = Vec3::from(camera_config.position);
    let target = Vec3::from(camera_config.target);

    let camera = commands
        .spawn((
            Camera3d::default(),
            // rack colors are shown exactly as the gradient computes them
            Tonemapping::None,
            Projection::Perspective(PerspectiveProjection {
                fov: camera_config.fov_degrees.to_radians(),
                near: camera_config.near,
                far: camera_config.far,
                aspect_ratio: viewport.x / viewport.y.max(1.0),
                ..default()
            }),
            Transform::from_translation(position).looking_at(target, Vec3::Y),
            MainCamera,
            OrbitCamera::new(position, target, OrbitSettings::from(&settings.controls)),
        ))
        .id();

    let overlay_root = commands
        .spawn((
            Name::new("label overlay"),
            LabelOverlayRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Px(viewport.x),
                height: Val::Px(viewport.y),
                ..default()
            },
        ))
        .id();

    commands.insert_resource(SceneContext {
        viewport,
        camera,
        overlay_root,
    });

    info!("Scene context ready, viewport {}x{}", viewport.x, viewport.y);
}
