use crate::core::settings::ViewSettings;
use crate::helpers::color::to_color;
use crate::helpers::mesh::outline_mesh;
use crate::labels::components::LabelAnchor;
use crate::room::components::*;
use crate::room::gradient_material::RackGradientMaterial;
use bevy::prelude::*;
use racklayout::layout::{
    HemisphereLight, OUTLINE_COLOR, OUTLINE_OPACITY, Rack as RackData, RackStyle, RoomLayout,
    Surface,
};

/// Directional part of the hemisphere light, at intensity 1.
const SKY_ILLUMINANCE_LUX: f32 = 10_000.0;
/// Ambient part of the hemisphere light, at intensity 1.
const GROUND_AMBIENT_BRIGHTNESS: f32 = 500.0;

/// Spawns the whole room: floor, wall, light, then every rack in layout order.
pub fn build_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut gradient_materials: ResMut<Assets<RackGradientMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewSettings>,
) {
    let layout = RoomLayout::server_room();
    let style = settings.scene.rack_style;

    let floor = spawn_surface(&mut commands, &mut meshes, &mut materials, &layout.floor);
    commands.entity(floor).insert((Floor, Name::new("floor")));

    let wall = spawn_surface(&mut commands, &mut meshes, &mut materials, &layout.wall);
    commands.entity(wall).insert((Wall, Name::new("wall")));

    spawn_light(&mut commands, &layout.light);

    for (index, rack) in layout.racks.iter().enumerate() {
        let entity = spawn_rack(
            &mut commands,
            &mut meshes,
            &mut gradient_materials,
            &mut materials,
            rack,
            style,
        );
        commands
            .entity(entity)
            .insert((Rack { index }, Name::new(format!("rack {index}"))));
    }

    info!(
        "Room built: {} racks ({} labelled), {:?} style",
        layout.racks.len(),
        layout.active_racks().count(),
        style
    );
}

pub fn spawn_surface(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    surface: &Surface,
) -> Entity {
    let mesh = meshes.add(Plane3d::new(surface.normal, surface.size / 2.0));
    let material = materials.add(StandardMaterial {
        base_color: to_color(surface.color),
        metallic: surface.metallic,
        perceptual_roughness: surface.roughness,
        unlit: !surface.lit,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(surface.center),
        ))
        .id()
}

/// Bevy has no hemisphere light: the sky color comes from a light shining
/// straight down, the ground color from ambient light.
pub fn spawn_light(commands: &mut Commands, light: &HemisphereLight) {
    commands.insert_resource(AmbientLight {
        color: to_color(light.ground),
        brightness: GROUND_AMBIENT_BRIGHTNESS * light.intensity,
        ..default()
    });

    commands.spawn((
        Name::new("hemisphere light"),
        DirectionalLight {
            color: to_color(light.sky),
            illuminance: SKY_ILLUMINANCE_LUX * light.intensity,
            ..default()
        },
        Transform::from_translation(light.position).looking_at(Vec3::ZERO, Vec3::Z),
    ));
}

/// Builds one rack group: gradient box, optional edge outline and one anchor per
/// label. Positions are taken as given.
pub fn spawn_rack(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    gradient_materials: &mut Assets<RackGradientMaterial>,
    materials: &mut Assets<StandardMaterial>,
    rack: &RackData,
    style: RackStyle,
) -> Entity {
    let body_mesh = meshes.add(Cuboid::from_size(rack.size()));
    let body_material = gradient_materials.add(RackGradientMaterial::from(&rack.colors));

    let outline = style.has_outline().then(|| {
        let mesh = meshes.add(outline_mesh(rack.size()));
        let material = materials.add(StandardMaterial {
            base_color: to_color(OUTLINE_COLOR).with_alpha(OUTLINE_OPACITY),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        (mesh, material)
    });

    commands
        .spawn((Transform::from_translation(rack.position), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                RackBody,
                RackShading(rack.colors),
                Mesh3d(body_mesh),
                MeshMaterial3d(body_material),
                Transform::from_scale(Vec3::splat(style.box_scale())),
            ));

            if let Some((mesh, material)) = outline {
                parent.spawn((RackOutline, Mesh3d(mesh), MeshMaterial3d(material)));
            }

            for label in &rack.labels {
                parent.spawn((
                    LabelAnchor::from(label),
                    Transform::from_translation(label.position.local_translation()),
                    Visibility::default(),
                ));
            }
        })
        .id()
}

/// Pushes changed rack colors into their gradient material before the frame is drawn.
pub fn sync_rack_gradients(
    racks: Query<(&RackShading, &MeshMaterial3d<RackGradientMaterial>), Changed<RackShading>>,
    mut gradient_materials: ResMut<Assets<RackGradientMaterial>>,
) {
    for (shading, material) in &racks {
        if let Some(material) = gradient_materials.get_mut(&material.0) {
            material.set_colors(&shading.0);
        }
    }
}
