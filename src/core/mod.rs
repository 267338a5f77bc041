// Nobara Log Uploader - core/mod.rs
//
// Core logic layer: data model, merging, journal and response parsing.
// Must NOT depend on: ui, platform, app, or spawn processes directly.

pub mod journal;
pub mod merge;
pub mod model;
pub mod response;
