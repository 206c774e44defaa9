//! Builder and action methods for integration tests.

use crate::buildings::BuildingType;
use crate::game_actions::{ActionQueue, ActionSource, GameAction};
use crate::grid::GridCell;

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    /// Select a tool before the test starts.
    pub fn with_tool(mut self, tool: BuildingType) -> Self {
        self.act(GameAction::SelectTool { tool });
        self
    }

    /// Place a building of `kind` at (x, z). The previously selected tool is
    /// restored afterwards.
    pub fn with_building(mut self, kind: BuildingType, x: i32, z: i32) -> Self {
        let previous = self.selected_tool();
        self.act(GameAction::SelectTool { tool: kind });
        self.click(x, z);
        self.act(GameAction::SelectTool { tool: previous });
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Queue an action and run one frame so the executor applies it.
    pub fn act(&mut self, action: GameAction) {
        self.queue(action);
        self.tick(1);
    }

    /// Queue an action without running a frame.
    pub fn queue(&mut self, action: GameAction) {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(ActionSource::Pointer, action);
    }

    /// Plain click on a cell.
    pub fn click(&mut self, x: i32, z: i32) {
        self.act(GameAction::PlaceOrRemove {
            cell: GridCell::new(x, z),
            modifier: false,
        });
    }

    /// Shift-click (or right-click) on a cell.
    pub fn modifier_click(&mut self, x: i32, z: i32) {
        self.act(GameAction::PlaceOrRemove {
            cell: GridCell::new(x, z),
            modifier: true,
        });
    }

    /// Run `n` frames.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }
}
