//! Viewport core: cameras, picking, element → render item mapping and the
//! scene adapter. Drawing itself lives behind `RenderBackend`.

pub mod backend;
pub mod camera;
pub mod picking;
pub mod scene;
pub mod shape;

pub use backend::{RenderBackend, RenderHandle, RetainedScene};
pub use camera::{ndc_to_screen, screen_to_ndc, Camera, ViewMode};
pub use scene::SceneAdapter;
pub use shape::{RenderItem, Shape};
