use crate::core::camera::components::{CameraChanged, OrbitCamera};
use crate::core::camera::logic::{OrbitInput, apply_orbit_input, update_orbit};
use crate::core::context::SceneContext;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_4;

/// Left drag rotates, right drag pans, the wheel zooms.
pub fn collect_orbit_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let mut drag = Vec2::ZERO;
    for ev in mouse_motion.read() {
        drag += ev.delta;
    }

    let mut wheel = 0.0;
    for ev in mouse_wheel.read() {
        wheel += ev.y;
    }

    let input = OrbitInput {
        rotate: if mouse_input.pressed(MouseButton::Left) { drag } else { Vec2::ZERO },
        pan: if mouse_input.pressed(MouseButton::Right) { drag } else { Vec2::ZERO },
        zoom: wheel,
    };
    if input.is_empty() {
        return;
    }

    for mut orbit in &mut cameras {
        orbit.pending.rotate += input.rotate;
        orbit.pending.pan += input.pan;
        orbit.pending.zoom += input.zoom;
    }
}

/// Per-tick controls update: turn pending input into motion, advance damping and
/// move the camera. Cameras that did not move keep their transform untouched.
pub fn update_orbit_cameras(
    context: Res<SceneContext>,
    mut cameras: Query<(Entity, &mut OrbitCamera, &mut Transform, &Projection)>,
    mut changed: MessageWriter<CameraChanged>,
) {
    for (entity, mut orbit, mut transform, projection) in &mut cameras {
        let fov = match projection {
            Projection::Perspective(perspective) => perspective.fov,
            _ => FRAC_PI_4,
        };

        let orbit = &mut *orbit;
        let input = std::mem::take(&mut orbit.pending);
        apply_orbit_input(&mut orbit.state, &orbit.settings, &input, context.viewport.y, fov);

        if update_orbit(&mut orbit.state, &orbit.settings) {
            transform.translation = orbit.state.position();
            transform.look_at(orbit.state.target, Vec3::Y);
            changed.write(CameraChanged { camera: entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::logic::OrbitSettings;
    use bevy::ecs::message::Messages;

    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<CameraChanged>()
            .add_systems(Update, update_orbit_cameras);

        let position = Vec3::new(1.0, 2.0, 8.0);
        let camera = app
            .world_mut()
            .spawn((
                Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
                Projection::Perspective(PerspectiveProjection::default()),
                OrbitCamera::new(position, Vec3::ZERO, OrbitSettings::default()),
            ))
            .id();
        let overlay_root = app.world_mut().spawn_empty().id();
        app.insert_resource(SceneContext {
            viewport: Vec2::new(1280.0, 720.0),
            camera,
            overlay_root,
        });
        (app, camera)
    }

    fn drain_changes(app: &mut App) -> usize {
        app.world_mut()
            .resource_mut::<Messages<CameraChanged>>()
            .drain()
            .count()
    }

    #[test]
    fn test_idle_ticks_leave_camera_untouched() {
        let (mut app, camera) = test_app();
        let before = *app.world().get::<Transform>(camera).unwrap();

        app.update();
        app.update();

        assert_eq!(*app.world().get::<Transform>(camera).unwrap(), before);
        assert_eq!(drain_changes(&mut app), 0);
    }

    #[test]
    fn test_drag_moves_camera_and_reports_change() {
        let (mut app, camera) = test_app();
        let before = app.world().get::<Transform>(camera).unwrap().translation;

        app.world_mut()
            .get_mut::<OrbitCamera>(camera)
            .unwrap()
            .pending
            .rotate = Vec2::new(120.0, 0.0);
        app.update();

        let after = app.world().get::<Transform>(camera).unwrap().translation;
        assert!(after.distance(before) > 1e-3);
        assert_eq!(drain_changes(&mut app), 1);

        // damping keeps the camera gliding after the drag ended
        app.update();
        assert_eq!(drain_changes(&mut app), 1);
    }
}
