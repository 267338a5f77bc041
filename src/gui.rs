// Nobara Log Uploader - gui.rs
//
// Top-level eframe::App implementation.
// Wires the checklist panel and dialogs to the upload lifecycle.

use crate::app::state::AppState;
use crate::app::upload::UploadManager;
use crate::ui;

/// The uploader application.
pub struct LogUploaderApp {
    pub state: AppState,
    pub upload_manager: UploadManager,
}

impl LogUploaderApp {
    pub fn new(state: AppState, upload_manager: UploadManager) -> Self {
        Self {
            state,
            upload_manager,
        }
    }
}

impl eframe::App for LogUploaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for upload progress
        let messages = self.upload_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            self.state.apply_progress(msg);
        }
        // Keep repainting while the worker runs so progress appears promptly.
        if had_messages || self.state.phase.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui::panels::sources::render(ui, &mut self.state) {
                if let Some(sources) = self.state.begin_upload() {
                    self.upload_manager
                        .start_upload(sources, self.state.source_headers);
                    ctx.request_repaint();
                }
            }
        });

        ui::panels::result::render(ctx, &mut self.state);
    }
}
