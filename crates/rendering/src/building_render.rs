use std::collections::HashMap;

use bevy::prelude::*;

use simulation::buildings::{BuildingType, PlacedBuilding};
use simulation::grid::GridCell;
use simulation::placement::PlacementEffect;

/// Marker for a building's visual entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct BuildingVisual {
    pub cell: GridCell,
    pub kind: BuildingType,
}

/// One shared mesh + material per building type.
#[derive(Resource, Default)]
pub struct BuildingMeshCache {
    handles: HashMap<BuildingType, (Handle<Mesh>, Handle<StandardMaterial>)>,
}

impl BuildingMeshCache {
    pub fn get_or_create(
        &mut self,
        kind: BuildingType,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> (Handle<Mesh>, Handle<StandardMaterial>) {
        self.handles
            .entry(kind)
            .or_insert_with(|| {
                let dims = kind.dimensions();
                let mesh = meshes.add(Cuboid::new(dims.x, dims.y, dims.z));
                let material = materials.add(StandardMaterial {
                    base_color: kind.color(),
                    perceptual_roughness: 0.8,
                    ..default()
                });
                (mesh, material)
            })
            .clone()
    }
}

/// Visual entity for every occupied cell. Mirrors the registry one-to-one.
#[derive(Resource, Default, Debug)]
pub struct BuildingVisuals {
    by_cell: HashMap<GridCell, Entity>,
}

impl BuildingVisuals {
    pub fn get(&self, cell: GridCell) -> Option<Entity> {
        self.by_cell.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.by_cell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_cell.is_empty()
    }
}

/// Turn placement effects into spawns and despawns.
pub fn apply_placement_effects(
    mut commands: Commands,
    mut effects: EventReader<PlacementEffect>,
    mut cache: ResMut<BuildingMeshCache>,
    mut visuals: ResMut<BuildingVisuals>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for effect in effects.read() {
        match effect {
            PlacementEffect::Add(building) => {
                let entity = spawn_building(
                    &mut commands,
                    building,
                    &mut cache,
                    &mut meshes,
                    &mut materials,
                );
                if let Some(stale) = visuals.by_cell.insert(building.cell, entity) {
                    warn!("Replacing stale visual at {}", building.cell);
                    commands.entity(stale).despawn_recursive();
                }
            }
            PlacementEffect::Remove(building) => {
                if let Some(entity) = visuals.by_cell.remove(&building.cell) {
                    commands.entity(entity).despawn_recursive();
                }
            }
        }
    }
}

fn spawn_building(
    commands: &mut Commands,
    building: &PlacedBuilding,
    cache: &mut BuildingMeshCache,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let (mesh, material) = cache.get_or_create(building.kind, meshes, materials);
    commands
        .spawn((
            BuildingVisual {
                cell: building.cell,
                kind: building.kind,
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(building.world_position),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::grid::GridConfig;

    fn render_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app.init_asset::<Mesh>();
        app.init_asset::<StandardMaterial>();
        app.add_event::<PlacementEffect>();
        app.init_resource::<BuildingMeshCache>();
        app.init_resource::<BuildingVisuals>();
        app.add_systems(Update, apply_placement_effects);
        app
    }

    fn building(kind: BuildingType, x: i32, z: i32, serial: u64) -> PlacedBuilding {
        PlacedBuilding::new(kind, GridCell::new(x, z), &GridConfig::default(), serial)
    }

    #[test]
    fn test_add_spawns_visual_at_world_position() {
        let mut app = render_app();
        let b = building(BuildingType::Commercial, 2, 2, 0);
        app.world_mut().send_event(PlacementEffect::Add(b));
        app.update();

        let entity = app
            .world()
            .resource::<BuildingVisuals>()
            .get(GridCell::new(2, 2))
            .unwrap();
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(2.0, 0.75, 2.0));
        let visual = app.world().get::<BuildingVisual>(entity).unwrap();
        assert_eq!(visual.kind, BuildingType::Commercial);
    }

    #[test]
    fn test_remove_despawns_visual() {
        let mut app = render_app();
        let b = building(BuildingType::Road, -1, 4, 0);
        app.world_mut().send_event(PlacementEffect::Add(b));
        app.update();
        let entity = app
            .world()
            .resource::<BuildingVisuals>()
            .get(b.cell)
            .unwrap();

        app.world_mut().send_event(PlacementEffect::Remove(b));
        app.update();

        assert!(app.world().get::<BuildingVisual>(entity).is_none());
        assert!(app.world().resource::<BuildingVisuals>().is_empty());
    }

    #[test]
    fn test_same_type_shares_mesh_handle() {
        let mut app = render_app();
        app.world_mut().send_event(PlacementEffect::Add(building(
            BuildingType::Park,
            0,
            0,
            0,
        )));
        app.world_mut().send_event(PlacementEffect::Add(building(
            BuildingType::Park,
            1,
            0,
            1,
        )));
        app.update();

        let visuals = app.world().resource::<BuildingVisuals>();
        assert_eq!(visuals.len(), 2);
        let a = visuals.get(GridCell::new(0, 0)).unwrap();
        let b = visuals.get(GridCell::new(1, 0)).unwrap();
        let mesh_a = app.world().get::<Mesh3d>(a).unwrap().0.id();
        let mesh_b = app.world().get::<Mesh3d>(b).unwrap().0.id();
        assert_eq!(mesh_a, mesh_b);
    }
}
