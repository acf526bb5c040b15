use eframe::egui::{self, RichText, Ui};

use crate::state::{Category, DashboardState};

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Title and a one-line description of the catalog span.
pub fn header(ui: &mut Ui, state: &DashboardState) {
    ui.heading("Состояние игровой индустрии");

    let catalog = state.catalog();
    if let (Some(min), Some(max)) = (catalog.min_year(), catalog.max_year()) {
        ui.label(format!(
            "Анализ игровой индустрии с {min} по {max} год. \
             Используйте фильтры, чтобы увидеть результат."
        ));
    }
}

// ---------------------------------------------------------------------------
// Filter widgets
// ---------------------------------------------------------------------------

/// Genre and rating multi-selects, side by side.
pub fn filters(ui: &mut Ui, state: &mut DashboardState) {
    ui.columns(2, |cols| {
        multi_select(&mut cols[0], state, Category::Genre, "Жанры игр");
        multi_select(&mut cols[1], state, Category::Rating, "Рейтинги игр");
    });
}

fn multi_select(ui: &mut Ui, state: &mut DashboardState, category: Category, label: &str) {
    // Clone what we need so we can mutate state inside the loop.
    let options = state.options(category).to_vec();

    let n_selected = options
        .iter()
        .filter(|v| state.is_selected(category, v))
        .count();
    let header_text = format!("{label}  ({n_selected}/{})", options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("Все").clicked() {
                    state.select_all(category);
                }
                if ui.small_button("Ничего").clicked() {
                    state.select_none(category);
                }
            });

            ui.horizontal_wrapped(|ui: &mut Ui| {
                for value in &options {
                    let mut checked = state.is_selected(category, value);
                    if ui.checkbox(&mut checked, value.as_str()).changed() {
                        state.set_selected(category, value, checked);
                    }
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Year slider
// ---------------------------------------------------------------------------

/// Slider whose stops are the distinct release years of the catalog.
pub fn year_slider(ui: &mut Ui, state: &mut DashboardState) {
    let years = state.catalog().years().to_vec();
    let Some(last) = years.len().checked_sub(1) else {
        ui.label("Нет данных для фильтра по годам.");
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        let mut stop = state.year_stop();
        let slider = egui::Slider::new(&mut stop, 0..=last).show_value(false);
        if ui.add(slider).changed() {
            state.set_max_year(years[stop]);
        }
        ui.label(RichText::new(format!("≤ {}", state.selection().max_year)).strong());
    });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for year in &years {
            ui.weak(year.to_string());
        }
    });
}

// ---------------------------------------------------------------------------
// Result text
// ---------------------------------------------------------------------------

pub fn result_text(ui: &mut Ui, state: &DashboardState) {
    ui.label(RichText::new(&state.count_text).size(16.0));
}
