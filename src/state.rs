use std::collections::BTreeSet;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::FilterSelection;
use crate::data::model::Catalog;
use crate::handlers;
use crate::view::{RatingHistogram, ScorePlot};

// ---------------------------------------------------------------------------
// Interaction state
// ---------------------------------------------------------------------------

/// Idle between events; `Recomputing` only while the handlers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recomputing,
}

/// Which multi-select a change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Genre,
    Rating,
}

/// The full dashboard state, independent of rendering.
pub struct DashboardState {
    catalog: Arc<Catalog>,
    selection: FilterSelection,
    phase: Phase,

    /// Last outputs of the three handlers.
    pub count_text: String,
    pub histogram: RatingHistogram,
    pub scatter: ScorePlot,

    /// Stable colours: ratings for the histogram, genres for the scatter.
    pub rating_colors: ColorMap,
    pub genre_colors: ColorMap,
}

impl DashboardState {
    pub fn new(catalog: Arc<Catalog>, config: &DashboardConfig) -> Self {
        if let (Some(min), Some(max)) = (catalog.min_year(), catalog.max_year()) {
            if !(min..=max).contains(&config.default_year) {
                log::warn!(
                    "Default year {} is outside the catalog span {min}..={max}",
                    config.default_year
                );
            }
        }

        let selection = FilterSelection::new(
            config.default_genres.iter().cloned(),
            config.default_ratings.iter().cloned(),
            config.default_year,
        );

        let mut state = Self {
            rating_colors: ColorMap::new(catalog.ratings()),
            genre_colors: ColorMap::new(catalog.genres()),
            catalog,
            selection,
            phase: Phase::Idle,
            count_text: String::new(),
            histogram: RatingHistogram::default(),
            scatter: ScorePlot::default(),
        };
        state.recompute();
        state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn selected_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Genre => &mut self.selection.genres,
            Category::Rating => &mut self.selection.ratings,
        }
    }

    /// Catalog-wide options for a multi-select.
    pub fn options(&self, category: Category) -> &[String] {
        match category {
            Category::Genre => self.catalog.genres(),
            Category::Rating => self.catalog.ratings(),
        }
    }

    pub fn is_selected(&self, category: Category, value: &str) -> bool {
        match category {
            Category::Genre => self.selection.genres.contains(value),
            Category::Rating => self.selection.ratings.contains(value),
        }
    }

    /// Add or remove a single value from a multi-select.
    pub fn set_selected(&mut self, category: Category, value: &str, selected: bool) {
        let set = self.selected_mut(category);
        let changed = if selected {
            set.insert(value.to_string())
        } else {
            set.remove(value)
        };
        if changed {
            self.recompute();
        }
    }

    /// Select every catalog value of a multi-select.
    pub fn select_all(&mut self, category: Category) {
        let all: BTreeSet<String> = self.options(category).iter().cloned().collect();
        let set = self.selected_mut(category);
        if *set != all {
            *set = all;
            self.recompute();
        }
    }

    /// Deselect everything in a multi-select.
    pub fn select_none(&mut self, category: Category) {
        let set = self.selected_mut(category);
        if !set.is_empty() {
            set.clear();
            self.recompute();
        }
    }

    /// Move the year slider.
    pub fn set_max_year(&mut self, year: i32) {
        if self.selection.max_year != year {
            self.selection.max_year = year;
            self.recompute();
        }
    }

    /// Index of the slider stop to show for the current year: the latest
    /// catalog year not after it, or the first stop when it precedes them all.
    pub fn year_stop(&self) -> usize {
        self.catalog
            .years()
            .iter()
            .rposition(|&y| y <= self.selection.max_year)
            .unwrap_or(0)
    }

    /// Run all three handlers against the current selection.
    fn recompute(&mut self) {
        debug_assert_eq!(self.phase, Phase::Idle, "recompute is not re-entrant");
        self.phase = Phase::Recomputing;

        self.count_text = handlers::update_count(&self.catalog, &self.selection);
        self.histogram = handlers::update_histogram(&self.catalog, &self.selection);
        self.scatter = handlers::update_scatter(&self.catalog, &self.selection);

        log::debug!(
            "Recomputed for genres {:?}, ratings {:?}, year <= {}: {}",
            self.selection.genres,
            self.selection.ratings,
            self.selection.max_year,
            self.count_text
        );
        self.phase = Phase::Idle;
    }
}
