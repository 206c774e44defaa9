//! Input handling for the placement tools.
//!
//! Split into sub-modules by concern:
//! - `types`: Resource types (CursorCell, StatusMessage, ReportedActions)
//! - `cursor`: Cursor-to-cell tracking and the status message timer
//! - `click`: Turning pointer clicks into placement actions
//! - `keyboard`: Keyboard shortcuts and action result reporting

mod click;
mod cursor;
mod keyboard;
mod types;


// Types and resources
pub use types::{CursorCell, ReportedActions, StatusMessage};

// Cursor systems
pub use cursor::{tick_status_message, update_cursor_cell};

// Click handling
pub use click::{click_action, handle_placement_clicks};

// Keyboard and status systems
pub use keyboard::{keyboard_shortcuts, report_action_results, status_text};
