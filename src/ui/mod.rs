// DoctorDirectory - ui/mod.rs
//
// UI layer: presentation only. Renders the directory as plain text for
// the terminal.
// Dependencies: app (state), core (read-only models).
// Must NOT depend on: platform, direct I/O.

pub mod cards;
