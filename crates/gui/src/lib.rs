// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui) remain in the binary crate.

pub mod backup;
pub mod fixtures;
pub mod gateway;
pub mod geometry;
pub mod gesture;
pub mod harness;
pub mod labels;
pub mod photo;
pub mod state;
