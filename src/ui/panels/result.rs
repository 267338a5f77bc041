// Nobara Log Uploader - ui/panels/result.rs
//
// Result and error dialogs. Rendered as centred modals over a dimmed
// backdrop while the shell is in a Showing* phase.

use crate::app::state::AppState;
use crate::core::model::ShellPhase;
use crate::ui::theme;

/// Render the paste URL (or upload error) dialog, if one is due.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let (title, body, delete_url, is_error) = match &state.phase {
        ShellPhase::ShowingResult(result) => (
            "Paste URL",
            result.pasteurl.clone(),
            result.deleteurl.clone(),
            false,
        ),
        ShellPhase::ShowingError(error) => ("Upload failed", error.clone(), None, true),
        _ => return,
    };

    let mut dismissed = false;
    let modal = egui::Modal::new(egui::Id::new("upload_result_dialog")).show(ctx, |ui| {
        ui.set_min_width(theme::DIALOG_MIN_WIDTH);
        ui.heading(title);
        ui.add_space(theme::DIALOG_MARGIN);
        ui.horizontal(|ui| {
            ui.add_space(theme::DIALOG_MARGIN);
            let text = if is_error {
                egui::RichText::new(&body).color(theme::ERROR_TEXT)
            } else {
                egui::RichText::new(&body).monospace()
            };
            // The URL must stay on one line so it can be selected whole.
            let wrap = if is_error {
                egui::TextWrapMode::Wrap
            } else {
                egui::TextWrapMode::Extend
            };
            ui.add(egui::Label::new(text).selectable(true).wrap_mode(wrap));
            ui.add_space(theme::DIALOG_MARGIN);
        });

        if let Some(ref url) = delete_url {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(theme::DIALOG_MARGIN);
                ui.label(egui::RichText::new("Delete link:").small().weak());
                ui.add(
                    egui::Label::new(egui::RichText::new(url).small().monospace())
                        .selectable(true)
                        .wrap_mode(egui::TextWrapMode::Extend),
                );
            });
        }
        ui.add_space(theme::DIALOG_MARGIN);

        ui.separator();
        ui.horizontal(|ui| {
            if !is_error && ui.button("Copy").clicked() {
                ctx.copy_text(body.clone());
                tracing::debug!("Paste URL copied to clipboard");
            }
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    // Escape or a click on the backdrop closes it like OK.
    if dismissed || modal.should_close() {
        state.dismiss_dialog();
    }
}
