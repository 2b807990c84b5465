use bevy::math::{Vec2, Vec3};
use racklayout::config::ControlsConfig;
use std::f32::consts::{PI, TAU};

const EPS: f32 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSettings {
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

impl From<&ControlsConfig> for OrbitSettings {
    fn from(config: &ControlsConfig) -> Self {
        Self {
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
            screen_space_panning: config.screen_space_panning,
            min_polar_angle: config.min_polar_angle,
            max_polar_angle: config.max_polar_angle,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
        }
    }
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self::from(&ControlsConfig::default())
    }
}

/// Pointer input gathered over one frame, in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    pub rotate: Vec2,
    pub pan: Vec2,
    /// Wheel lines, positive moves the camera closer.
    pub zoom: f32,
}

impl OrbitInput {
    pub fn is_empty(&self) -> bool {
        self.rotate == Vec2::ZERO && self.pan == Vec2::ZERO && self.zoom == 0.0
    }
}

/// Spherical camera placement around a target plus the motion still to be applied.
///
/// `azimuth` is measured around +Y starting from +Z, `polar` from +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub azimuth_delta: f32,
    pub polar_delta: f32,
    pub pan_offset: Vec3,
    pub scale: f32,
}

impl OrbitState {
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let (azimuth, polar) = if radius == 0.0 {
            (0.0, 0.0)
        } else {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        };
        Self {
            target,
            radius,
            azimuth,
            polar,
            azimuth_delta: 0.0,
            polar_delta: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn offset(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }

    pub fn position(&self) -> Vec3 {
        self.target + self.offset()
    }

    /// Camera right axis; always horizontal since the camera keeps +Y up.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.azimuth.cos(), 0.0, -self.azimuth.sin())
    }

    pub fn up(&self) -> Vec3 {
        let forward = -self.offset().normalize_or_zero();
        self.right().cross(forward)
    }

    pub fn is_settled(&self) -> bool {
        self.azimuth_delta.abs() < EPS
            && self.polar_delta.abs() < EPS
            && self.pan_offset.length_squared() < EPS
            && self.scale == 1.0
    }
}

/// Queue pointer input as pending motion. Nothing moves until [`update_orbit`].
pub fn apply_orbit_input(
    state: &mut OrbitState,
    settings: &OrbitSettings,
    input: &OrbitInput,
    viewport_height: f32,
    fov: f32,
) {
    if input.is_empty() || viewport_height <= 0.0 {
        return;
    }

    if input.rotate != Vec2::ZERO {
        state.azimuth_delta -= TAU * input.rotate.x / viewport_height * settings.rotate_speed;
        state.polar_delta -= TAU * input.rotate.y / viewport_height * settings.rotate_speed;
    }

    if input.zoom != 0.0 {
        let zoom_scale = 0.95_f32.powf(settings.zoom_speed);
        state.scale *= zoom_scale.powf(input.zoom);
    }

    if input.pan != Vec2::ZERO {
        let pan = input.pan * settings.pan_speed;
        // distance covered by half the viewport height at the target
        let target_distance = state.offset().length() * (fov / 2.0).tan();

        let left = 2.0 * pan.x * target_distance / viewport_height;
        state.pan_offset -= state.right() * left;

        let up_axis = if settings.screen_space_panning {
            state.up()
        } else {
            Vec3::Y.cross(state.right())
        };
        let up = 2.0 * pan.y * target_distance / viewport_height;
        state.pan_offset += up_axis * up;
    }
}

/// Advance the orbit by one tick. Returns whether the camera moved.
pub fn update_orbit(state: &mut OrbitState, settings: &OrbitSettings) -> bool {
    let previous_position = state.position();
    let previous_target = state.target;

    let step = if settings.enable_damping {
        settings.damping_factor
    } else {
        1.0
    };

    state.azimuth += state.azimuth_delta * step;
    state.polar += state.polar_delta * step;
    state.polar = state
        .polar
        .clamp(settings.min_polar_angle, settings.max_polar_angle)
        .clamp(EPS, PI - EPS);

    state.radius = (state.radius * state.scale).clamp(settings.min_distance, settings.max_distance);
    state.target += state.pan_offset * step;

    if settings.enable_damping {
        let decay = 1.0 - settings.damping_factor;
        state.azimuth_delta *= decay;
        state.polar_delta *= decay;
        state.pan_offset *= decay;
    } else {
        state.azimuth_delta = 0.0;
        state.polar_delta = 0.0;
        state.pan_offset = Vec3::ZERO;
    }
    state.scale = 1.0;

    previous_position.distance_squared(state.position()) > EPS
        || previous_target.distance_squared(state.target) > EPS
}
