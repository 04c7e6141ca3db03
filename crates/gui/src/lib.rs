// Library crate: the headless editor core, exposed for integration tests and
// scripted sessions. egui panels and the app shell stay in the binary crate.

pub mod catalog;
pub mod command;
pub mod editor;
pub mod fixtures;
pub mod harness;
pub mod placement;
pub mod state;
pub mod storage;
pub mod viewport;
