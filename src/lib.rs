mod core;
mod helpers;
mod labels;
mod loading;
mod room;

pub use crate::core::settings::systems::update_mode;

use crate::core::camera::CameraPlugin;
use crate::core::context::spawn_scene_context;
use crate::core::frame::FramePlugin;
use crate::core::settings::SettingsPlugin;
use crate::helpers::color::to_color;
use crate::labels::LabelsPlugin;
use crate::loading::LoadingPlugin;
use crate::room::RoomPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use racklayout::config::{ConfigFallback, ViewConfig};

pub struct RackViewPlugin {
    pub config: ViewConfig,
    /// Set when `config` holds defaults because the settings file could not be used.
    pub config_fallback: Option<ConfigFallback>,
}

impl Plugin for RackViewPlugin {
    fn build(&self, app: &mut App) {
        debug!("View settings: {:?}", self.config);
        app.insert_resource(ClearColor(to_color(self.config.scene.clear_color)))
            .add_plugins((
                SettingsPlugin {
                    config: self.config.clone(),
                    fallback: self.config_fallback.clone(),
                },
                FramePlugin,
                CameraPlugin,
                LoadingPlugin,
                RoomPlugin,
                LabelsPlugin,
            ))
            .add_systems(Startup, spawn_scene_context);

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
