// Nobara Log Uploader - ui/theme.rs
//
// Colour and layout constants.

use egui::Color32;

/// Diagnostic text colour (skipped sources, config warnings).
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Error dialog accent.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Layout constants.
pub const WINDOW_WIDTH: f32 = 300.0;
pub const WINDOW_HEIGHT: f32 = 240.0;
pub const ITEM_SPACING: f32 = 6.0;
pub const DIALOG_MARGIN: f32 = 12.0;
pub const DIALOG_MIN_WIDTH: f32 = 260.0;
