use crate::color::Rgb;
use crate::layout::RackStyle;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

pub const CONFIG_PATH: &str = "rackview_config.toml";

static CONFIG: OnceLock<Mutex<LoadedConfig>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Why the settings file was not used on first load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFallback {
    Missing(PathBuf),
    Rejected(String),
}

impl fmt::Display for ConfigFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "{} not found, using default view settings", path.display()),
            Self::Rejected(reason) => write!(f, "{reason}; using default view settings"),
        }
    }
}

#[derive(Debug, Clone)]
struct LoadedConfig {
    config: ViewConfig,
    fallback: Option<ConfigFallback>,
}

fn loaded() -> std::sync::MutexGuard<'static, LoadedConfig> {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    match config_mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Get a copy of the current configuration, loading it on first use.
/// A missing or broken file falls back to the defaults.
pub fn get_config() -> ViewConfig {
    loaded().config.clone()
}

/// Reason the first load fell back to defaults, if it did.
///
/// Nothing is logged while loading: the first load usually happens before any
/// logger is installed, so callers report this once logging is up.
pub fn config_fallback() -> Option<ConfigFallback> {
    loaded().fallback.clone()
}

/// Re-read the settings file. On error the current settings are kept.
pub fn reload_config() -> Result<ViewConfig, ConfigError> {
    let new_config = ViewConfig::load_from_file(CONFIG_PATH)?;
    *loaded() = LoadedConfig {
        config: new_config.clone(),
        fallback: None,
    };
    log::info!("Reloaded {CONFIG_PATH}");
    Ok(new_config)
}

fn load_or_default(path: impl AsRef<Path>) -> LoadedConfig {
    let path = path.as_ref();
    let (config, fallback) = match ViewConfig::load_from_file(path) {
        Ok(config) => (config, None),
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            (ViewConfig::default(), Some(ConfigFallback::Missing(path.to_path_buf())))
        }
        Err(err) => (ViewConfig::default(), Some(ConfigFallback::Rejected(err.to_string()))),
    };
    LoadedConfig { config, fallback }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub scene: SceneConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub screen_space_panning: bool,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub rack_style: RackStyle,
    pub clear_color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Rack View".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [1.0, 2.0, 8.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.25,
            screen_space_panning: false,
            min_polar_angle: 0.0,
            max_polar_angle: FRAC_PI_2,
            min_distance: 0.5,
            max_distance: 100.0,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rack_style: RackStyle::Beveled,
            clear_color: Rgb::BLACK,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,wgpu=error,naga=warn".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        let controls = &self.controls;
        let floats = [
            ("camera.fov_degrees", camera.fov_degrees),
            ("camera.near", camera.near),
            ("camera.far", camera.far),
            ("controls.damping_factor", controls.damping_factor),
            ("controls.min_polar_angle", controls.min_polar_angle),
            ("controls.max_polar_angle", controls.max_polar_angle),
            ("controls.min_distance", controls.min_distance),
            ("controls.max_distance", controls.max_distance),
            ("controls.rotate_speed", controls.rotate_speed),
            ("controls.zoom_speed", controls.zoom_speed),
            ("controls.pan_speed", controls.pan_speed),
        ];
        let vectors = [("camera.position", camera.position), ("camera.target", camera.target)];
        let non_finite = floats
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
            .or_else(|| {
                vectors
                    .into_iter()
                    .find(|(_, value)| value.iter().any(|v| !v.is_finite()))
                    .map(|(name, _)| name)
            });
        if let Some(name) = non_finite {
            return Err(ConfigError::Invalid(format!("{name} must be a finite number")));
        }

        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }

        if !(controls.damping_factor > 0.0 && controls.damping_factor <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "controls.damping_factor must be in (0, 1], got {}",
                controls.damping_factor
            )));
        }
        if controls.min_polar_angle > controls.max_polar_angle {
            return Err(ConfigError::Invalid(
                "controls.min_polar_angle is greater than controls.max_polar_angle".to_string(),
            ));
        }
        if controls.min_distance > controls.max_distance {
            return Err(ConfigError::Invalid(
                "controls.min_distance is greater than controls.max_distance".to_string(),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".to_string()));
        }
        Ok(())
    }
}
