// Cloud Calendar Application
// Main entry point

use std::path::PathBuf;

use anyhow::Context;
use cloud_calendar::config::AppConfig;
use cloud_calendar::services;
use cloud_calendar::ui_egui::CalendarApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Cloud Calendar");

    // Optional first argument: path to a config file
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    let backend = services::connect(&config).context("Failed to connect to the event backend")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar",
        native_options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, &config, backend)))),
    )
    .map_err(|e| anyhow::anyhow!("Calendar window failed: {e}"))
}
