// DoctorDirectory - platform/mod.rs
//
// Platform abstraction layer: config directories, config.toml, and the
// network/file read of the directory payload.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod fetch;
