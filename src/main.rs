mod app;
mod config;
mod style;
mod types;
mod ui;

use app::ApManagerApp;
use config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load_or_default(&AppConfig::default_path());
    let window_size = [config.window.width, config.window.height];
    tracing::info!(company = %config.company_name, "starting AP Management System");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size(window_size),
        ..Default::default()
    };

    eframe::run_native(
        "AP Management System",
        options,
        Box::new(move |cc| Ok(Box::new(ApManagerApp::new(cc, config)))),
    )
}
