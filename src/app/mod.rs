// Nobara Log Uploader - app/mod.rs
//
// Application layer: source list, state management, upload orchestration.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod sources;
pub mod state;
pub mod upload;
