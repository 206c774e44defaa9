use bevy::prelude::*;

use simulation::buildings::BuildingType;
use simulation::placement::PlacementController;

use crate::input::CursorCell;

const PREVIEW_ALPHA: f32 = 0.4;

/// Marker for the cursor ghost preview entity
#[derive(Component)]
pub struct CursorPreview;

pub fn spawn_cursor_preview(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Unit cube, scaled per building type.
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, PREVIEW_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        CursorPreview,
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 0.5, 0.0),
        Visibility::Hidden,
    ));
}

/// Ghost color: the tool's color, or red when a plain click would be a no-op.
pub fn preview_color(tool: BuildingType, occupied: bool) -> Color {
    if occupied {
        return Color::srgba(0.9, 0.15, 0.1, PREVIEW_ALPHA);
    }
    let c = tool.color().to_srgba();
    Color::srgba(c.red, c.green, c.blue, PREVIEW_ALPHA)
}

pub fn update_cursor_preview(
    cursor: Res<CursorCell>,
    controller: Res<PlacementController>,
    mut query: Query<
        (
            &mut Transform,
            &mut Visibility,
            &MeshMaterial3d<StandardMaterial>,
        ),
        With<CursorPreview>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mut transform, mut vis, mat_handle)) = query.get_single_mut() else {
        return;
    };

    let Some(cell) = cursor.cell else {
        *vis = Visibility::Hidden;
        return;
    };

    let tool = controller.selected_tool();
    let occupied = controller.registry().is_occupied(cell);
    let ground = controller.grid().cell_to_world(cell);
    let dims = tool.dimensions();

    transform.translation = Vec3::new(ground.x, dims.y / 2.0, ground.y);
    transform.scale = dims;
    *vis = Visibility::Visible;

    let color = preview_color(tool, occupied);
    if let Some(mat) = materials.get_mut(&mat_handle.0) {
        if mat.base_color != color {
            mat.base_color = color;
        }
    }
}
