//! Toolbar UI module.
//!
//! - `grid_form`: the width/depth text fields and their parsing
//! - `ui_system`: the `toolbar_ui` egui system (tools, grid controls, status bar)
//! - `widgets`: small formatting helpers

mod grid_form;
mod ui_system;
mod widgets;


pub use grid_form::{init_grid_form, sync_grid_form, GridSizeForm};
pub use ui_system::toolbar_ui;
