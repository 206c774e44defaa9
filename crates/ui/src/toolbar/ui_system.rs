use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::buildings::BuildingType;
use simulation::game_actions::{ActionError, ActionQueue, ActionSource, GameAction};
use simulation::keybindings::KeyBindings;
use simulation::placement::PlacementController;

use rendering::input::{CursorCell, StatusMessage};

use super::grid_form::GridSizeForm;
use super::widgets::{building_summary, hovered_cell_label};

fn tool_color(kind: BuildingType) -> egui::Color32 {
    let c = kind.color().to_srgba();
    egui::Color32::from_rgb(
        (c.red * 255.0) as u8,
        (c.green * 255.0) as u8,
        (c.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Main toolbar system
// ---------------------------------------------------------------------------

pub fn toolbar_ui(
    mut contexts: EguiContexts,
    controller: Res<PlacementController>,
    cursor: Res<CursorCell>,
    bindings: Res<KeyBindings>,
    mut form: ResMut<GridSizeForm>,
    mut status: ResMut<StatusMessage>,
    mut queue: ResMut<ActionQueue>,
) {
    let selected = controller.selected_tool();
    let grid_visible = controller.grid().visible;

    // ---- Top toolbar: tools and grid controls ----
    egui::TopBottomPanel::top("top_toolbar")
        .exact_height(36.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                for kind in BuildingType::ALL {
                    let text = egui::RichText::new(kind.label())
                        .strong()
                        .color(tool_color(kind));
                    let btn = ui
                        .selectable_label(kind == selected, text)
                        .on_hover_text(format!(
                            "Shortcut: {}",
                            bindings.tool_binding(kind).display_label()
                        ));
                    if btn.clicked() {
                        queue.push(ActionSource::Toolbar, GameAction::SelectTool { tool: kind });
                    }
                }

                ui.separator();

                if ui.button("Reset").clicked() {
                    queue.push(ActionSource::Toolbar, GameAction::ResetAll);
                }
                let grid_label = if grid_visible { "Grid: On" } else { "Grid: Off" };
                if ui.selectable_label(grid_visible, grid_label).clicked() {
                    queue.push(ActionSource::Toolbar, GameAction::ToggleGrid);
                }

                ui.separator();

                ui.label("W");
                ui.add(egui::TextEdit::singleline(&mut form.width).desired_width(40.0));
                ui.label("D");
                ui.add(egui::TextEdit::singleline(&mut form.depth).desired_width(40.0));
                if ui.button("Apply").clicked() {
                    match form.submit() {
                        Ok(action) => queue.push(ActionSource::Toolbar, action),
                        Err(err) => {
                            let err = ActionError::InvalidGridSize(err);
                            warn!("{}", err.message());
                            status.set(err.message(), true);
                        }
                    }
                }

                ui.separator();

                ui.menu_button("Keys", |ui| {
                    egui::Grid::new("key_help").striped(true).show(ui, |ui| {
                        for (description, binding) in bindings.help_entries() {
                            ui.label(description);
                            ui.monospace(binding.display_label());
                            ui.end_row();
                        }
                        ui.label("Remove building");
                        ui.monospace("Shift+Click / Right-click");
                        ui.end_row();
                    });
                });
            });
        });

    // ---- Bottom status bar ----
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(28.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                ui.label(building_summary(controller.registry()));
                ui.separator();
                ui.label(hovered_cell_label(cursor.cell));
                ui.separator();
                ui.label(format!(
                    "Grid {} x {}",
                    controller.grid().width,
                    controller.grid().depth
                ));

                if status.active() {
                    let color = if status.is_error {
                        egui::Color32::from_rgb(220, 60, 50)
                    } else {
                        egui::Color32::from_rgb(200, 200, 200)
                    };
                    ui.separator();
                    ui.colored_label(color, &status.text);
                }
            });
        });
}
