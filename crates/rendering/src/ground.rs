use bevy::prelude::*;

use simulation::placement::{GridEffect, PlacementController};

/// Marker for the ground plane entity.
#[derive(Component)]
pub struct Ground;

fn ground_mesh(size: Vec2) -> Mesh {
    Mesh::from(Plane3d::default().mesh().size(size.x, size.y))
}

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    controller: Res<PlacementController>,
) {
    let size = controller.grid().ground_size();
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(ground_mesh(size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.36, 0.52, 0.32),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::IDENTITY,
    ));
}

/// Swap in a new ground mesh when the grid is resized. The old mesh asset is
/// freed once its last handle drops.
pub fn resize_ground(
    mut grid_events: EventReader<GridEffect>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut query: Query<&mut Mesh3d, With<Ground>>,
) {
    for effect in grid_events.read() {
        let GridEffect::Resized { ground_size, .. } = effect else {
            continue;
        };
        let Ok(mut mesh) = query.get_single_mut() else {
            return;
        };
        mesh.0 = meshes.add(ground_mesh(*ground_size));
    }
}

pub fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
