use crate::data::filter::{filter, FilterSelection};
use crate::data::model::Catalog;
use crate::view::{count_message, RatingHistogram, ScorePlot};

// ---------------------------------------------------------------------------
// One handler per dashboard output.  Each re-filters the full catalog.
// ---------------------------------------------------------------------------

/// Result text for the current selection.
pub fn update_count(catalog: &Catalog, selection: &FilterSelection) -> String {
    count_message(filter(catalog, selection).len())
}

/// Games per release year, stacked by rating.
pub fn update_histogram(catalog: &Catalog, selection: &FilterSelection) -> RatingHistogram {
    RatingHistogram::from_records(filter(catalog, selection))
}

/// User score against critic score, coloured by genre.
pub fn update_scatter(catalog: &Catalog, selection: &FilterSelection) -> ScorePlot {
    ScorePlot::from_records(filter(catalog, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_catalog;

    #[test]
    fn outputs_agree_on_the_default_selection() {
        let catalog = sample_catalog();
        let selection = FilterSelection::new(["Sports", "Strategy"], ["T", "E"], 2008);

        let matching = filter(&catalog, &selection).len();
        assert_eq!(update_count(&catalog, &selection), format!("Результат фильтрации: {matching}"));

        let histogram = update_histogram(&catalog, &selection);
        let stacked: usize = histogram
            .years()
            .into_iter()
            .map(|year| histogram.total_for_year(year))
            .sum();
        assert_eq!(stacked, matching);

        let scatter = update_scatter(&catalog, &selection);
        assert_eq!(scatter.len() + scatter.omitted, matching);
    }

    #[test]
    fn empty_rating_set_clears_every_output() {
        let catalog = sample_catalog();
        let selection = FilterSelection::new(["Sports"], Vec::<String>::new(), 2012);

        assert_eq!(update_count(&catalog, &selection), "Результат фильтрации: 0");
        assert!(update_histogram(&catalog, &selection).is_empty());
        assert!(update_scatter(&catalog, &selection).is_empty());
    }
}
