pub(crate) mod systems;

use crate::core::settings::systems::*;
use bevy::prelude::*;
use racklayout::config::{ConfigFallback, ViewConfig};

/// Key that re-reads the settings file while the viewer runs.
pub const RELOAD_SETTINGS_KEY: KeyCode = KeyCode::F5;

/// View configuration currently in effect.
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct ViewSettings(pub ViewConfig);

/// How the settings were obtained at startup. Reported once logging is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigStatus {
    pub fallback: Option<ConfigFallback>,
}

pub(crate) struct SettingsPlugin {
    pub config: ViewConfig,
    pub fallback: Option<ConfigFallback>,
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ViewSettings(self.config.clone()))
            .insert_resource(ConfigStatus {
                fallback: self.fallback.clone(),
            })
            .add_systems(Startup, report_config_status)
            .add_systems(
                Update,
                (
                    reload_settings_on_key,
                    apply_view_settings.run_if(resource_changed::<ViewSettings>),
                )
                    .chain(),
            );
    }
}
