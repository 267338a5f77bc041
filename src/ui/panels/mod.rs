// Nobara Log Uploader - ui/panels/mod.rs

pub mod result;
pub mod sources;
