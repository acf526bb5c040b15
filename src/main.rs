mod app;
mod color;
mod config;
mod data;
mod error;
mod handlers;
mod state;
mod ui;
mod view;

use std::sync::Arc;

use anyhow::Context;
use app::GamesDashApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    let catalog = data::loader::load_file(&config.dataset_path)
        .with_context(|| format!("loading {}", config.dataset_path.display()))
        .inspect_err(|e| log::error!("Failed to load catalog: {e:#}"))?;
    log::info!(
        "Loaded {} games: {} genres, {} ratings, {} release years",
        catalog.len(),
        catalog.genres().len(),
        catalog.ratings().len(),
        catalog.years().len()
    );
    if catalog.is_empty() {
        log::warn!("{} contains no games", config.dataset_path.display());
    }
    let catalog = Arc::new(catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(GamesDashApp::new(catalog, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
