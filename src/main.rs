mod app;
mod config;
mod dashboard;
mod io;
mod message;
mod model;
mod state;
mod style;
mod view;

use app::QianApp;
use config::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_title(style::APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        style::APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(QianApp::new(cc, &config)?))),
    )
}
