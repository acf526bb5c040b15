use std::sync::Arc;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::model::Catalog;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GamesDashApp {
    pub state: DashboardState,
}

impl GamesDashApp {
    pub fn new(catalog: Arc<Catalog>, config: &DashboardConfig) -> Self {
        Self {
            state: DashboardState::new(catalog, config),
        }
    }
}

impl eframe::App for GamesDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panels: title, then the two multi-selects ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state);
        });

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            panels::filters(ui, &mut self.state);
        });

        // ---- Bottom panel: year slider ----
        egui::TopBottomPanel::bottom("year_slider").show(ctx, |ui| {
            panels::year_slider(ui, &mut self.state);
        });

        // ---- Central panel: result text and both charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::result_text(ui, &self.state);
            ui.separator();
            ui.columns(2, |cols| {
                plot::rating_histogram(&mut cols[0], &self.state);
                plot::score_scatter(&mut cols[1], &self.state);
            });
        });
    }
}
