// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use rackview::{RackViewPlugin, update_mode};

fn main() {
    let config = racklayout::get_config();
    let config_fallback = racklayout::config_fallback();

    App::new()
        .insert_resource(update_mode(config.controls.enable_damping))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: WindowResolution::new(config.window.width, config.window.height),
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: config.logging.filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(RackViewPlugin {
            config,
            config_fallback,
        })
        .run();
}
