// Nobara Log Uploader - ui/panels/sources.rs
//
// Main panel: heading, source checklist, Upload button, status line,
// and any diagnostics. Returns whether Upload was clicked this frame.

use crate::app::state::AppState;
use crate::core::model::ShellPhase;
use crate::ui::theme;

/// Heading shown above the checklist.
const HEADING: &str = "Send which files to the dumpsterfire?";

/// Render the checklist panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    ui.spacing_mut().item_spacing.y = theme::ITEM_SPACING;
    let idle = state.phase == ShellPhase::Idle;

    ui.label(HEADING);
    ui.separator();

    // Row labels are copied out so the checkbox bindings can borrow state mutably.
    let names: Vec<String> = state.sources().iter().map(|s| s.name.clone()).collect();
    egui::Grid::new("source_rows")
        .num_columns(2)
        .striped(true)
        .min_col_width(ui.available_width() / 2.0)
        .show(ui, |ui| {
            for (row, name) in names.iter().enumerate() {
                ui.label(name.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(checked) = state.checkbox_mut(row) {
                        ui.add_enabled(idle, egui::Checkbox::without_text(checked));
                    }
                });
                ui.end_row();
            }
        });

    ui.separator();

    let button = egui::Button::new("Upload").min_size(egui::vec2(ui.available_width(), 0.0));
    let clicked = ui.add_enabled(state.can_upload(), button).clicked();

    ui.horizontal(|ui| {
        if state.phase.is_busy() {
            ui.spinner();
        }
        ui.label(egui::RichText::new(&state.status_message).small().weak());
    });

    let notes: Vec<&String> = state
        .startup_warnings
        .iter()
        .chain(state.diagnostics.iter())
        .collect();
    if !notes.is_empty() {
        egui::CollapsingHeader::new(format!("Warnings ({})", notes.len()))
            .default_open(true)
            .show(ui, |ui| {
                for note in notes {
                    ui.label(egui::RichText::new(note).small().color(theme::WARNING_TEXT));
                }
            });
    }

    clicked
}
