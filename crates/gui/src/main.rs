mod app;
pub mod i18n;
mod ui;

// Re-export library modules so that `crate::state`, `crate::photo`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use stowage_gui_lib::backup;
pub use stowage_gui_lib::gateway;
pub use stowage_gui_lib::geometry;
pub use stowage_gui_lib::gesture;
pub use stowage_gui_lib::labels;
pub use stowage_gui_lib::photo;
pub use stowage_gui_lib::state;

use app::StowageApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stowage_gui=info".into()),
        )
        .init();

    // Parse --data <path> argument
    let initial_snapshot = parse_data_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stowage — Domácí organizátor")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "stowage-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(StowageApp::new(cc, initial_snapshot)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_data_arg() -> Option<shared::InventorySnapshot> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--data" && i + 1 < args.len() {
            let path = std::path::Path::new(&args[i + 1]);
            match state::InventoryState::load_from(path) {
                Some(snapshot) => {
                    tracing::info!(
                        "Loaded inventory from {} ({} cabinets)",
                        path.display(),
                        snapshot.cabinets.len()
                    );
                    return Some(snapshot);
                }
                None => {
                    tracing::error!("Failed to load inventory file {}", path.display());
                }
            }
            break;
        }
        i += 1;
    }
    None
}
