mod app;
pub mod i18n;
mod ui;

// Re-export library modules so that `crate::state`, `crate::editor`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use garden_gui_lib::catalog;
pub use garden_gui_lib::editor;
pub use garden_gui_lib::placement;
pub use garden_gui_lib::state;
pub use garden_gui_lib::storage;
pub use garden_gui_lib::viewport;

use std::path::PathBuf;

use app::GardenApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_gui=info,garden_gui_lib=info".into()),
        )
        .init();

    let args = parse_args();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Garden Planner")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "garden-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(GardenApp::new(cc, args)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Command line options
#[derive(Debug, Default)]
pub struct LaunchArgs {
    /// Exported garden to import on start (`--garden <path>`)
    pub garden: Option<PathBuf>,
    /// Share link to open on start (`--link <url>`)
    pub link: Option<String>,
}

fn parse_args() -> LaunchArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut launch = LaunchArgs::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--garden" if i + 1 < args.len() => {
                launch.garden = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--link" if i + 1 < args.len() => {
                launch.link = Some(args[i + 1].clone());
                i += 1;
            }
            other => tracing::warn!("Ignoring argument {other}"),
        }
        i += 1;
    }
    launch
}
