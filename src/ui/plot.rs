use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::state::DashboardState;
use crate::view::{
    RatingHistogram, HISTOGRAM_LEGEND, HISTOGRAM_TITLE, HISTOGRAM_X_LABEL, HISTOGRAM_Y_LABEL,
    SCATTER_LEGEND, SCATTER_TITLE, SCATTER_X_LABEL, SCATTER_Y_LABEL,
};

const PLOT_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// Histogram: games per year, stacked by rating
// ---------------------------------------------------------------------------

pub fn rating_histogram(ui: &mut Ui, state: &DashboardState) {
    ui.strong(HISTOGRAM_TITLE);
    ui.weak(format!("цвет: {}", HISTOGRAM_LEGEND.to_lowercase()));
    if state.histogram.is_empty() {
        ui.weak("Нет игр для выбранных фильтров.");
    }

    let charts: Vec<BarChart> = stacked_bars(&state.histogram)
        .into_iter()
        .map(|(rating, bars)| {
            BarChart::new(bars)
                .name(rating)
                .color(state.rating_colors.color_for(rating))
        })
        .collect();

    Plot::new("rating_histogram")
        .legend(Legend::default())
        .x_axis_label(HISTOGRAM_X_LABEL)
        .y_axis_label(HISTOGRAM_Y_LABEL)
        .height(PLOT_HEIGHT)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// One bar per (rating, year) over every year of the histogram, each resting
/// on the ratings drawn before it.  Years a rating lacks get a zero-height bar
/// so every layer covers the same years.
fn stacked_bars(histogram: &RatingHistogram) -> Vec<(&str, Vec<Bar>)> {
    let years = histogram.years();
    let mut tops = vec![0.0; years.len()];

    histogram
        .series
        .iter()
        .map(|series| {
            let bars: Vec<Bar> = years
                .iter()
                .zip(tops.iter_mut())
                .map(|(&year, top)| {
                    let count = series.counts.get(&year).copied().unwrap_or(0);
                    let bar = Bar::new(year as f64, count as f64)
                        .base_offset(*top)
                        .width(0.8)
                        .name(format!(
                            "{year}: {count} из {}",
                            histogram.total_for_year(year)
                        ));
                    *top += count as f64;
                    bar
                })
                .collect();
            (series.rating.as_str(), bars)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter: user score vs critic score, coloured by genre
// ---------------------------------------------------------------------------

pub fn score_scatter(ui: &mut Ui, state: &DashboardState) {
    ui.strong(SCATTER_TITLE);
    ui.weak(format!("цвет: {}", SCATTER_LEGEND.to_lowercase()));
    if state.scatter.is_empty() {
        ui.weak("Нет игр с оценками для выбранных фильтров.");
    }

    Plot::new("score_scatter")
        .legend(Legend::default())
        .x_axis_label(SCATTER_X_LABEL)
        .y_axis_label(SCATTER_Y_LABEL)
        .height(PLOT_HEIGHT)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.scatter.series {
                let points = Points::new(series.points.clone())
                    .name(&series.genre)
                    .color(state.genre_colors.color_for(&series.genre))
                    .radius(3.0);
                plot_ui.points(points);
            }
        });

    if state.scatter.omitted > 0 {
        ui.weak(format!("Без оценок: {}", state.scatter.omitted));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::game;

    #[test]
    fn stacks_line_up_by_year_when_ratings_cover_different_years() {
        let records = vec![
            game("Sports", "E", 2008, None),
            game("Sports", "T", 2004, None),
            game("Action", "T", 2008, None),
            game("Action", "M", 2006, None),
            game("Sports", "E", 2008, None),
        ];
        let histogram = RatingHistogram::from_records(&records);
        let layers = stacked_bars(&histogram);

        let ratings: Vec<&str> = layers.iter().map(|(rating, _)| *rating).collect();
        assert_eq!(ratings, ["E", "T", "M"]);

        let years = histogram.years();
        let mut running = vec![0.0; years.len()];
        for (_, bars) in &layers {
            assert_eq!(bars.len(), years.len());
            for ((bar, &year), sum) in bars.iter().zip(&years).zip(running.iter_mut()) {
                assert_eq!(bar.argument, year as f64);
                assert_eq!(bar.base_offset, Some(*sum));
                *sum += bar.value;
                assert_eq!(bar.base_offset.unwrap() + bar.value, *sum);
            }
        }

        for (&year, &top) in years.iter().zip(&running) {
            let expected = records
                .iter()
                .filter(|r| r.release_year == Some(year))
                .count();
            assert_eq!(top, expected as f64, "year {year}");
            assert_eq!(top, histogram.total_for_year(year) as f64);
        }
    }

    #[test]
    fn lone_bar_for_a_later_rating_starts_at_zero() {
        let records = vec![game("Sports", "E", 2008, None), game("Sports", "T", 2004, None)];
        let histogram = RatingHistogram::from_records(&records);
        let layers = stacked_bars(&histogram);

        let (_, t_bars) = &layers[1];
        let t_2004 = t_bars.iter().find(|bar| bar.argument == 2004.0).unwrap();
        assert_eq!(t_2004.base_offset, Some(0.0));
        assert_eq!(t_2004.value, 1.0);
    }

    #[test]
    fn empty_histogram_has_no_layers() {
        assert!(stacked_bars(&RatingHistogram::default()).is_empty());
    }
}
