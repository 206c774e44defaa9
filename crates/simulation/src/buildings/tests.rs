#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::buildings::{BuildingType, PlacedBuilding};
    use crate::grid::{GridCell, GridConfig};

    #[test]
    fn test_dimension_table() {
        assert_eq!(
            BuildingType::Residential.dimensions(),
            Vec3::new(0.8, 1.0, 0.8)
        );
        assert_eq!(
            BuildingType::Commercial.dimensions(),
            Vec3::new(0.8, 1.5, 0.8)
        );
        assert_eq!(
            BuildingType::Industrial.dimensions(),
            Vec3::new(0.8, 0.8, 0.8)
        );
        assert_eq!(BuildingType::Road.dimensions(), Vec3::new(0.9, 0.1, 0.9));
        assert_eq!(BuildingType::Park.dimensions(), Vec3::new(0.8, 0.2, 0.8));
    }

    #[test]
    fn test_buildings_fit_inside_a_cell() {
        for kind in BuildingType::ALL {
            let dims = kind.dimensions();
            assert!(dims.x < 1.0 && dims.z < 1.0, "{kind:?} overflows its cell");
            assert!(dims.y > 0.0);
        }
    }

    #[test]
    fn test_tool_id_round_trip() {
        for kind in BuildingType::ALL {
            assert_eq!(BuildingType::from_tool_id(kind.tool_id()), kind);
        }
        assert_eq!(
            BuildingType::from_tool_id(" Commercial "),
            BuildingType::Commercial
        );
    }

    #[test]
    fn test_unknown_tool_id_falls_back_to_default_box() {
        let kind = BuildingType::from_tool_id("skyscraper");
        assert_eq!(kind, BuildingType::Residential);
        assert_eq!(kind.dimensions(), Vec3::new(0.8, 1.0, 0.8));
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<&str> = BuildingType::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), BuildingType::ALL.len());
    }

    #[test]
    fn test_placed_building_sits_on_ground() {
        let config = GridConfig::default();
        let b = PlacedBuilding::new(BuildingType::Road, GridCell::new(-2, 6), &config, 0);
        assert_eq!(b.world_position, Vec3::new(-2.0, 0.05, 6.0));
    }
}
