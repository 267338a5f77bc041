// Nobara Log Uploader - platform/mod.rs
//
// Platform layer: config files, filesystem, child processes.
// Dependencies: core (model types and traits), directories, std::process.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
pub mod journal;
pub mod paste;
