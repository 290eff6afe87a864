// DoctorDirectory - core/mod.rs
//
// Core business logic layer: record model, record store, filter engine,
// export.
// Must NOT depend on: ui, platform, app, or any network/file I/O.

pub mod export;
pub mod filter;
pub mod model;
pub mod store;
