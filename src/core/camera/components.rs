use crate::core::camera::logic::{OrbitInput, OrbitSettings, OrbitState};
use bevy::prelude::*;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct MainCamera;

/// Orbit controls bound to a camera.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub state: OrbitState,
    pub settings: OrbitSettings,
    /// Input gathered since the last tick.
    pub pending: OrbitInput,
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3, settings: OrbitSettings) -> Self {
        Self {
            state: OrbitState::from_position(position, target),
            settings,
            pending: OrbitInput::default(),
        }
    }
}

/// Written whenever an orbit camera moved during a tick.
#[derive(Message, Debug, Clone, Copy)]
pub struct CameraChanged {
    pub camera: Entity,
}
