use crate::core::context::SceneContext;
use crate::labels::components::{HasOverlay, LabelAnchor, LabelOverlay};
use crate::labels::logic::centered_top_left;
use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use bevy::ui::ComputedNode;

const LABEL_FONT_SIZE: f32 = 14.0;

pub fn spawn_label_overlays(
    mut commands: Commands,
    context: Res<SceneContext>,
    anchors: Query<(Entity, &LabelAnchor), Without<HasOverlay>>,
) {
    for (anchor, label) in &anchors {
        let overlay = commands
            .spawn((
                LabelOverlay { anchor },
                Node {
                    position_type: PositionType::Absolute,
                    padding: UiRect::axes(Val::Px(4.0), Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(Color::BLACK),
                Text::new(label.text.clone()),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                // shown once the first projection placed it
                Visibility::Hidden,
                ChildOf(context.overlay_root),
            ))
            .id();
        commands.entity(anchor).insert(HasOverlay(overlay));
        debug!("Label overlay {overlay} created for anchor {anchor}");
    }
}

pub fn sync_label_text(
    anchors: Query<(&LabelAnchor, &HasOverlay), Changed<LabelAnchor>>,
    mut texts: Query<&mut Text, With<LabelOverlay>>,
) {
    for (label, overlay) in &anchors {
        if let Ok(mut text) = texts.get_mut(overlay.0) {
            if text.0 != label.text {
                text.0 = label.text.clone();
            }
        }
    }
}

/// Places every overlay node over its anchor's projected position. Anchors that
/// cannot be projected (behind the camera, outside the clip range) hide their node.
///
/// World positions are computed from this tick's local transforms, so labels keep
/// up with a camera that moved earlier in the same frame.
pub fn project_label_overlays(
    context: Res<SceneContext>,
    cameras: Query<&Camera>,
    transforms: TransformHelper,
    mut overlays: Query<(&LabelOverlay, &mut Node, &ComputedNode, &mut Visibility)>,
) {
    let Ok(camera) = cameras.get(context.camera) else {
        return;
    };
    let Ok(camera_transform) = transforms.compute_global_transform(context.camera) else {
        return;
    };

    for (overlay, mut node, computed, mut visibility) in &mut overlays {
        let Ok(anchor_transform) = transforms.compute_global_transform(overlay.anchor) else {
            continue;
        };

        match camera.world_to_viewport(&camera_transform, anchor_transform.translation()) {
            Ok(projected) => {
                let size = computed.size() * computed.inverse_scale_factor();
                let top_left = centered_top_left(projected, size);
                let (left, top) = (Val::Px(top_left.x), Val::Px(top_left.y));
                if node.left != left || node.top != top {
                    node.left = left;
                    node.top = top;
                }
                visibility.set_if_neq(Visibility::Inherited);
            }
            Err(_) => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

/// Labels go away together with the rack that owned their anchor.
pub fn despawn_orphaned_overlays(
    mut commands: Commands,
    overlays: Query<(Entity, &LabelOverlay)>,
    anchors: Query<(), With<LabelAnchor>>,
) {
    for (entity, overlay) in &overlays {
        if anchors.get(overlay.anchor).is_err() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_context() -> (World, Entity) {
        let mut world = World::new();
        let camera = world.spawn_empty().id();
        let overlay_root = world.spawn(Node::default()).id();
        world.insert_resource(SceneContext {
            viewport: Vec2::new(1280.0, 720.0),
            camera,
            overlay_root,
        });
        (world, overlay_root)
    }

    fn overlays(world: &mut World) -> Vec<(Entity, LabelOverlay)> {
        let mut query = world.query::<(Entity, &LabelOverlay)>();
        query.iter(world).map(|(e, o)| (e, *o)).collect()
    }

    #[test]
    fn test_each_anchor_gets_exactly_one_overlay() {
        let (mut world, overlay_root) = world_with_context();
        let anchor = world
            .spawn((
                LabelAnchor { text: "20 °C".to_string() },
                Transform::from_xyz(0.0, 1.0, 0.0),
            ))
            .id();

        world.run_system_once(spawn_label_overlays).unwrap();
        world.run_system_once(spawn_label_overlays).unwrap();

        let overlays = overlays(&mut world);
        assert_eq!(overlays.len(), 1);
        let (overlay, link) = overlays[0];
        assert_eq!(link.anchor, anchor);
        assert_eq!(world.get::<HasOverlay>(anchor).unwrap().0, overlay);
        assert_eq!(world.get::<Text>(overlay).unwrap().0, "20 °C");
        assert_eq!(world.get::<TextColor>(overlay).unwrap().0, Color::WHITE);
        assert_eq!(world.get::<BackgroundColor>(overlay).unwrap().0, Color::BLACK);
        assert_eq!(world.get::<ChildOf>(overlay).unwrap().parent(), overlay_root);
    }

    #[test]
    fn test_overlay_follows_anchor_text() {
        let (mut world, _) = world_with_context();
        let anchor = world.spawn(LabelAnchor { text: "20 °C".to_string() }).id();
        world.run_system_once(spawn_label_overlays).unwrap();

        world.get_mut::<LabelAnchor>(anchor).unwrap().text = "25 °C".to_string();
        world.run_system_once(sync_label_text).unwrap();

        let overlay = world.get::<HasOverlay>(anchor).unwrap().0;
        assert_eq!(world.get::<Text>(overlay).unwrap().0, "25 °C");
    }

    #[test]
    fn test_overlay_removed_with_its_rack() {
        let (mut world, _) = world_with_context();
        let rack = world.spawn(Transform::from_xyz(2.0, 0.0, -3.0)).id();
        let kept = world.spawn(LabelAnchor { text: "19 °C".to_string() }).id();
        world.spawn((LabelAnchor { text: "20 °C".to_string() }, ChildOf(rack)));
        world.run_system_once(spawn_label_overlays).unwrap();
        assert_eq!(overlays(&mut world).len(), 2);

        world.entity_mut(rack).despawn();
        world.run_system_once(despawn_orphaned_overlays).unwrap();

        let remaining = overlays(&mut world);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].1.anchor, kept);
    }
}
