use bevy::prelude::*;

use simulation::grid::GridCell;

/// How long a status message stays on screen, in seconds.
pub const STATUS_DURATION_SECS: f32 = 3.0;

/// The ground cell currently under the pointer, if any.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct CursorCell {
    pub cell: Option<GridCell>,
}

#[derive(Resource, Default, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub timer: f32,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, is_error: bool) {
        self.text = text.into();
        self.timer = STATUS_DURATION_SECS;
        self.is_error = is_error;
    }

    pub fn active(&self) -> bool {
        self.timer > 0.0
    }
}

/// How far into the `ActionResultLog` the status bar has reported.
#[derive(Resource, Default, Debug)]
pub struct ReportedActions {
    pub seen_total: u64,
}
