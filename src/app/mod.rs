// DoctorDirectory - app/mod.rs
//
// Application layer: directory state and the background load.
// Dependencies: core layer, platform fetch.
// Must NOT depend on: ui.

pub mod load;
pub mod state;
