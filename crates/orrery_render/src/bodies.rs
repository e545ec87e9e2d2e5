use bevy::prelude::*;

use orrery_sim::SystemState;

use super::to_world;

/// Marker linking a circle mesh entity to its body index in `SystemState`
#[derive(Component)]
pub struct BodyVisual {
    pub index: usize,
}

/// Z layers: guides render as gizmos, meshes stack sun below bodies
const SUN_LAYER: f32 = 1.0;
const BODY_LAYER: f32 = 2.0;

/// Spawn the 2D camera plus one circle mesh per body and the sun
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    system: Res<SystemState>,
) {
    commands.spawn(Camera2d);

    // The sun never moves, so its mesh needs no marker or sync system
    let [sr, sg, sb] = system.sun.color;
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(system.sun.radius as f32))),
        MeshMaterial2d(materials.add(Color::srgb_u8(sr, sg, sb))),
        Transform::from_xyz(0.0, 0.0, SUN_LAYER),
    ));

    for (index, body) in system.bodies.iter().enumerate() {
        let [r, g, b] = body.color();
        let pos = to_world(body.position, system.center);
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(body.radius as f32))),
            MeshMaterial2d(materials.add(Color::srgb_u8(r, g, b))),
            Transform::from_xyz(pos.x, pos.y, BODY_LAYER),
            BodyVisual { index },
        ));
    }

    info!("spawned {} body visuals", system.bodies.len());
}

/// Sync mesh transforms from the freshly-ticked body positions
pub fn update_body_transforms(
    system: Res<SystemState>,
    mut query: Query<(&mut Transform, &BodyVisual)>,
) {
    for (mut transform, visual) in &mut query {
        let Some(body) = system.bodies.get(visual.index) else {
            continue;
        };
        let pos = to_world(body.position, system.center);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
