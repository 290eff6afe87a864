// DoctorDirectory - lib.rs
//
// Library entry point, exposing the filtering core, the load pipeline,
// and the text renderers for integration testing and programmatic use.
//
// The command-line front end lives in `main.rs` and is not part of the
// library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
