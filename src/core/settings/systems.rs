use crate::core::camera::components::OrbitCamera;
use crate::core::camera::logic::OrbitSettings;
use crate::core::settings::{ConfigStatus, RELOAD_SETTINGS_KEY, ViewSettings};
use crate::helpers::color::to_color;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

pub fn report_config_status(status: Res<ConfigStatus>) {
    match &status.fallback {
        Some(fallback) => warn!("{fallback}"),
        None => debug!("View settings loaded from {}", racklayout::config::CONFIG_PATH),
    }
}

pub fn reload_settings_on_key(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<ViewSettings>) {
    if !keys.just_pressed(RELOAD_SETTINGS_KEY) {
        return;
    }
    match racklayout::reload_config() {
        Ok(config) => {
            info!("View settings reloaded");
            settings.0 = config;
        }
        Err(err) => warn!("Keeping current view settings: {err}"),
    }
}

/// Pushes settings that can change at runtime into the running scene. Window
/// size, rack style and the log filter only take effect on the next start.
pub fn apply_view_settings(
    settings: Res<ViewSettings>,
    mut clear_color: ResMut<ClearColor>,
    winit: Option<ResMut<WinitSettings>>,
    mut cameras: Query<(&mut OrbitCamera, &mut Projection)>,
) {
    clear_color.0 = to_color(settings.scene.clear_color);

    if let Some(mut winit) = winit {
        *winit = update_mode(settings.controls.enable_damping);
    }

    let orbit_settings = OrbitSettings::from(&settings.controls);
    for (mut orbit, mut projection) in &mut cameras {
        if orbit.settings != orbit_settings {
            orbit.settings = orbit_settings.clone();
        }
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.fov = settings.camera.fov_degrees.to_radians();
            perspective.near = settings.camera.near;
            perspective.far = settings.camera.far;
        }
    }
}

/// With damping the camera keeps gliding after input stops, so draw every
/// frame. Without it, draw only on input and explicit redraw requests.
pub fn update_mode(enable_damping: bool) -> WinitSettings {
    if enable_damping {
        WinitSettings::game()
    } else {
        WinitSettings::desktop_app()
    }
}
