pub mod catalog_panel;
pub mod dialogs;
pub mod painter;
pub mod properties;
pub mod status_bar;
pub mod toolbar;
pub mod viewport;
