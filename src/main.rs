//! Dialog Host - gallery for the egui dialog registry
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the dialog registry
//! - Action runtime: a Tokio runtime for deferred confirm actions
//! - Communication via crossbeam channels (lock-free, sync-safe)

use dialog_host::app::DemoApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Log to stderr; RUST_LOG overrides the default level
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Dialog Host");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dialog Host",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)?))),
    )
}
