//! Gizmo demo entry point

use std::path::PathBuf;

use gizmo_core::GizmoConfig;

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gizmo_frontend=debug,gizmo_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting gizmo demo");

    // Optional style file: `gizmo-demo path/to/gizmo.ron`
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match &config_path {
        Some(path) if path.exists() => GizmoConfig::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load {}: {}, using defaults", path.display(), e);
            GizmoConfig::default()
        }),
        _ => GizmoConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gizmo Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "gizmo-demo",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(gizmo_frontend::GizmoDemoApp::new(
                cc,
                config,
                config_path,
            )))
        }),
    )
}
