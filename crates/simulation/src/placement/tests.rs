#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bevy::prelude::*;

    use crate::buildings::BuildingType;
    use crate::grid::{GridAxis, GridCell, GridConfig, GridSizeError};
    use crate::placement::{GridEffect, PlacementController, PlacementDecision, PlacementEffect};

    fn controller_with(tool: BuildingType) -> PlacementController {
        let mut controller = PlacementController::default();
        controller.select_tool(tool);
        controller
    }

    fn snapshot(controller: &PlacementController) -> Vec<(GridCell, BuildingType)> {
        let mut cells: Vec<_> = controller
            .registry()
            .iter()
            .map(|b| (b.cell, b.kind))
            .collect();
        cells.sort_by_key(|(cell, _)| *cell);
        cells
    }

    #[test]
    fn test_place_on_empty_cell_adds_selected_type() {
        let mut controller = controller_with(BuildingType::Commercial);
        let decision = controller.place_or_remove(GridCell::new(2, 2), false);

        let PlacementDecision::Added(building) = decision else {
            panic!("expected Added, got {decision:?}");
        };
        assert_eq!(building.kind, BuildingType::Commercial);
        assert_eq!(building.cell, GridCell::new(2, 2));
        assert_eq!(building.world_position, Vec3::new(2.0, 0.75, 2.0));
        assert_eq!(building.kind.dimensions().y, 1.5);
        assert_eq!(controller.registry().len(), 1);
        assert_eq!(decision.effect(), Some(PlacementEffect::Add(building)));
    }

    #[test]
    fn test_occupied_cell_without_modifier_is_noop() {
        let mut controller = controller_with(BuildingType::Residential);
        let cell = GridCell::new(-1, 4);
        controller.place_or_remove(cell, false);

        controller.select_tool(BuildingType::Industrial);
        let before = controller.registry().len();
        let decision = controller.place_or_remove(cell, false);
        assert!(matches!(decision, PlacementDecision::Occupied(b) if b.kind == BuildingType::Residential));
        assert_eq!(decision.effect(), None);
        assert_eq!(controller.registry().len(), before);
        assert_eq!(
            controller.registry().get(cell).map(|b| b.kind),
            Some(BuildingType::Residential),
            "existing building must not be overwritten"
        );
    }

    #[test]
    fn test_modifier_on_occupied_cell_removes() {
        let mut controller = controller_with(BuildingType::Park);
        let cell = GridCell::new(3, 3);
        controller.place_or_remove(cell, false);

        let decision = controller.place_or_remove(cell, true);
        let PlacementDecision::Removed(removed) = decision else {
            panic!("expected Removed, got {decision:?}");
        };
        assert_eq!(removed.kind, BuildingType::Park);
        assert!(controller.registry().is_empty());
        assert_eq!(decision.effect(), Some(PlacementEffect::Remove(removed)));
    }

    #[test]
    fn test_modifier_on_empty_cell_still_places() {
        let mut controller = controller_with(BuildingType::Road);
        let decision = controller.place_or_remove(GridCell::new(0, 0), true);
        assert!(matches!(decision, PlacementDecision::Added(b) if b.kind == BuildingType::Road));
    }

    #[test]
    fn test_add_then_remove_restores_registry() {
        let mut controller = controller_with(BuildingType::Residential);
        controller.place_or_remove(GridCell::new(1, 1), false);
        controller.place_or_remove(GridCell::new(5, -2), false);
        let before = snapshot(&controller);

        let cell = GridCell::new(7, 7);
        controller.place_or_remove(cell, false);
        controller.place_or_remove(cell, true);

        assert_eq!(snapshot(&controller), before);
    }

    #[test]
    fn test_at_most_one_building_per_cell_under_mixed_sequence() {
        let mut controller = PlacementController::default();
        let cells = [
            GridCell::new(0, 0),
            GridCell::new(1, 0),
            GridCell::new(0, 0),
            GridCell::new(-3, 2),
            GridCell::new(1, 0),
        ];
        for (i, cell) in cells.iter().cycle().take(40).enumerate() {
            controller.select_tool(BuildingType::ALL[i % BuildingType::ALL.len()]);
            controller.place_or_remove(*cell, i % 3 == 0);

            let unique: HashSet<GridCell> = controller.registry().iter().map(|b| b.cell).collect();
            assert_eq!(unique.len(), controller.registry().len());
        }
    }

    #[test]
    fn test_reset_all_emits_one_remove_per_building() {
        let mut controller = controller_with(BuildingType::Industrial);
        for x in 0..5 {
            controller.place_or_remove(GridCell::new(x, 0), false);
        }

        let effects = controller.reset_all();
        assert_eq!(effects.len(), 5);
        assert!(effects
            .iter()
            .all(|e| matches!(e, PlacementEffect::Remove(_))));
        assert!(controller.registry().is_empty());

        // Newest first.
        let xs: Vec<i32> = effects.iter().map(|e| e.building().cell.x).collect();
        assert_eq!(xs, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_reset_all_on_empty_registry() {
        let mut controller = PlacementController::default();
        assert!(controller.reset_all().is_empty());
        assert!(controller.registry().is_empty());
    }

    #[test]
    fn test_set_grid_config_rejects_without_state_change() {
        let mut controller = PlacementController::default();
        let before = controller.grid().clone();

        assert_eq!(
            controller.set_grid_config(0, 5),
            Err(GridSizeError::NotPositive {
                axis: GridAxis::Width,
                value: 0
            })
        );
        // Valid width, invalid depth: no partial update.
        assert!(controller.set_grid_config(12, -1).is_err());
        assert_eq!(controller.grid(), &before);
    }

    #[test]
    fn test_set_grid_config_updates_camera_and_ground() {
        let mut controller = PlacementController::default();
        let effect = controller.set_grid_config(30, 30).unwrap();

        let GridEffect::Resized {
            config,
            camera_home,
            ground_size,
        } = effect
        else {
            panic!("expected Resized");
        };
        assert_eq!(config.width, 30);
        assert_eq!(config.depth, 30);
        assert!((camera_home - Vec3::new(30.0, 21.0, 30.0)).length() < 1e-4);
        assert_eq!(ground_size, Vec2::new(60.0, 60.0));
        assert_eq!(controller.grid().width, 30);
    }

    #[test]
    fn test_shrinking_grid_keeps_buildings() {
        let mut controller = PlacementController::default();
        controller.place_or_remove(GridCell::new(15, 15), false);
        controller.set_grid_config(2, 2).unwrap();
        assert!(controller.registry().is_occupied(GridCell::new(15, 15)));
    }

    #[test]
    fn test_toggle_grid_visibility_only_flips_flag() {
        let mut controller = PlacementController::new(GridConfig::default());
        controller.place_or_remove(GridCell::new(1, 2), false);
        let width = controller.grid().width;

        assert_eq!(
            controller.toggle_grid_visibility(),
            GridEffect::VisibilityChanged { visible: false }
        );
        assert_eq!(
            controller.toggle_grid_visibility(),
            GridEffect::VisibilityChanged { visible: true }
        );
        assert_eq!(controller.registry().len(), 1);
        assert_eq!(controller.grid().width, width);
    }

    #[test]
    fn test_select_tool_reports_change() {
        let mut controller = PlacementController::default();
        assert_eq!(controller.selected_tool(), BuildingType::Residential);
        assert!(!controller.select_tool(BuildingType::Residential));
        assert!(controller.select_tool(BuildingType::Park));
        assert_eq!(controller.selected_tool(), BuildingType::Park);
    }

    #[test]
    fn test_world_position_uses_half_height() {
        let mut controller = PlacementController::default();
        for kind in BuildingType::ALL {
            controller.select_tool(kind);
            let cell = GridCell::new(kind as i32, -4);
            let PlacementDecision::Added(b) = controller.place_or_remove(cell, false) else {
                panic!("expected Added for {kind:?}");
            };
            assert_eq!(b.world_position.y, kind.height() / 2.0);
            assert_eq!(b.world_position.x, cell.x as f32);
            assert_eq!(b.world_position.z, -4.0);
        }
    }
}
