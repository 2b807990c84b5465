use crate::core::camera::components::CameraChanged;
use crate::core::context::SceneContext;
use bevy::prelude::*;
use bevy::window::{RequestRedraw, WindowResized};

/// Keeps the 3D view and the label overlay the same size as the window.
pub fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut context: ResMut<SceneContext>,
    mut projections: Query<&mut Projection>,
    mut nodes: Query<&mut Node>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    let viewport = Vec2::new(last.width, last.height);
    if context.viewport == viewport {
        return;
    }
    context.viewport = viewport;

    if let Ok(mut projection) = projections.get_mut(context.camera) {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = context.aspect_ratio();
        }
    }

    if let Ok(mut root) = nodes.get_mut(context.overlay_root) {
        root.width = Val::Px(viewport.x);
        root.height = Val::Px(viewport.y);
    }

    debug!("Viewport resized to {}x{}", viewport.x, viewport.y);
}

/// Turns camera motion into an explicit redraw so reactive update modes
/// still repaint while the user drags.
pub fn request_redraw_on_camera_change(
    mut changed: MessageReader<CameraChanged>,
    mut redraw: MessageWriter<RequestRedraw>,
) {
    if changed.read().count() > 0 {
        redraw.write(RequestRedraw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<WindowResized>()
            .add_message::<CameraChanged>()
            .add_message::<RequestRedraw>()
            .add_systems(Update, (handle_window_resize, request_redraw_on_camera_change));

        let camera = app
            .world_mut()
            .spawn(Projection::Perspective(PerspectiveProjection {
                aspect_ratio: 1280.0 / 720.0,
                ..default()
            }))
            .id();
        let overlay_root = app
            .world_mut()
            .spawn(Node {
                width: Val::Px(1280.0),
                height: Val::Px(720.0),
                ..default()
            })
            .id();
        app.insert_resource(SceneContext {
            viewport: Vec2::new(1280.0, 720.0),
            camera,
            overlay_root,
        });
        app
    }

    #[test]
    fn test_resize_updates_viewport_camera_and_overlay() {
        let mut app = test_app();
        app.world_mut().write_message(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1024.0,
            height: 512.0,
        });
        app.update();

        let context = *app.world().resource::<SceneContext>();
        assert_eq!(context.viewport, Vec2::new(1024.0, 512.0));

        let Projection::Perspective(perspective) =
            app.world().get::<Projection>(context.camera).unwrap()
        else {
            panic!("camera lost its perspective projection");
        };
        assert_eq!(perspective.aspect_ratio, 2.0);

        let root = app.world().get::<Node>(context.overlay_root).unwrap();
        assert_eq!(root.width, Val::Px(1024.0));
        assert_eq!(root.height, Val::Px(512.0));
    }

    #[test]
    fn test_last_resize_of_a_frame_wins() {
        let mut app = test_app();
        for (width, height) in [(800.0, 600.0), (1920.0, 1080.0)] {
            app.world_mut().write_message(WindowResized {
                window: Entity::PLACEHOLDER,
                width,
                height,
            });
        }
        app.update();

        let context = *app.world().resource::<SceneContext>();
        assert_eq!(context.viewport, Vec2::new(1920.0, 1080.0));
    }

    #[test]
    fn test_camera_change_requests_one_redraw() {
        let mut app = test_app();
        let camera = app.world().resource::<SceneContext>().camera;
        for _ in 0..3 {
            app.world_mut().write_message(CameraChanged { camera });
        }
        app.update();

        let redraws = app
            .world_mut()
            .resource_mut::<Messages<RequestRedraw>>()
            .drain()
            .count();
        assert_eq!(redraws, 1);
    }

    #[test]
    fn test_no_camera_change_no_redraw() {
        let mut app = test_app();
        app.update();

        let redraws = app
            .world_mut()
            .resource_mut::<Messages<RequestRedraw>>()
            .drain()
            .count();
        assert_eq!(redraws, 0);
    }
}
