use crate::buildings::BuildingType;
use crate::grid::GridCell;

/// Every user intent that can change placement state.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    SelectTool {
        tool: BuildingType,
    },
    /// Click on a cell. `modifier` is Shift or the secondary mouse button.
    PlaceOrRemove {
        cell: GridCell,
        modifier: bool,
    },
    ResetAll,
    SetGridSize {
        width: i64,
        depth: i64,
    },
    ToggleGrid,
}

impl GameAction {
    pub fn label(&self) -> &'static str {
        match self {
            GameAction::SelectTool { .. } => "select tool",
            GameAction::PlaceOrRemove { .. } => "place/remove",
            GameAction::ResetAll => "reset",
            GameAction::SetGridSize { .. } => "resize grid",
            GameAction::ToggleGrid => "toggle grid",
        }
    }
}
