use simulation::buildings::BuildingType;
use simulation::grid::GridCell;
use simulation::placement::BuildingRegistry;

pub(crate) fn hovered_cell_label(cell: Option<GridCell>) -> String {
    match cell {
        Some(cell) => format!("Cell {cell}"),
        None => "Cell -".to_string(),
    }
}

/// "12 buildings (R 4, C 3, ...)" with zero counts left out.
pub(crate) fn building_summary(registry: &BuildingRegistry) -> String {
    let total = registry.len();
    let noun = if total == 1 { "building" } else { "buildings" };
    let per_type: Vec<String> = BuildingType::ALL
        .iter()
        .filter_map(|kind| {
            let count = registry.count_of(*kind);
            (count > 0).then(|| format!("{} {count}", kind.label()))
        })
        .collect();
    if per_type.is_empty() {
        format!("{total} {noun}")
    } else {
        format!("{total} {noun} ({})", per_type.join(", "))
    }
}
