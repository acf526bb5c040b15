use std::collections::BTreeSet;

use super::model::{Catalog, GameRecord};

// ---------------------------------------------------------------------------
// Filter selection: the tuple chosen via the dashboard controls
// ---------------------------------------------------------------------------

/// Selected genres, selected ratings and the upper bound on release year.
///
/// An empty genre or rating set selects nothing; there is no implicit
/// "select all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub genres: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub max_year: i32,
}

impl FilterSelection {
    pub fn new<G, R>(genres: G, ratings: R, max_year: i32) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        FilterSelection {
            genres: genres.into_iter().map(Into::into).collect(),
            ratings: ratings.into_iter().map(Into::into).collect(),
            max_year,
        }
    }

    /// Conjunction of the year, genre and rating predicates.  A blank cell
    /// fails its predicate.
    pub fn matches(&self, record: &GameRecord) -> bool {
        record.release_year.is_some_and(|year| year <= self.max_year)
            && record.genre.as_ref().is_some_and(|g| self.genres.contains(g))
            && record.rating.as_ref().is_some_and(|r| self.ratings.contains(r))
    }
}

/// Return the games that pass the selection, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a GameRecord> {
    catalog
        .records()
        .iter()
        .filter(|rec| selection.matches(rec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{game, sample_catalog};

    fn default_selection() -> FilterSelection {
        FilterSelection::new(["Sports", "Strategy"], ["T", "E"], 2008)
    }

    #[test]
    fn default_scenario_respects_every_predicate() {
        let catalog = sample_catalog();
        let selection = default_selection();
        let result = filter(&catalog, &selection);

        assert_eq!(result.len(), 5);
        for rec in &result {
            assert!(rec.release_year.is_some_and(|y| y <= 2008));
            assert!(matches!(rec.genre.as_deref(), Some("Sports" | "Strategy")));
            assert!(matches!(rec.rating.as_deref(), Some("T" | "E")));
        }
    }

    #[test]
    fn result_keeps_catalog_order() {
        let catalog = sample_catalog();
        let result = filter(&catalog, &default_selection());
        let expected: Vec<&GameRecord> = [0, 2, 4, 6, 8]
            .iter()
            .map(|&i| &catalog.records()[i])
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn empty_genre_or_rating_set_selects_nothing() {
        let catalog = sample_catalog();
        for year in [1990, 2008, 3000] {
            let no_genres = FilterSelection::new(Vec::<String>::new(), ["T", "E"], year);
            let no_ratings = FilterSelection::new(["Sports"], Vec::<String>::new(), year);
            assert!(filter(&catalog, &no_genres).is_empty());
            assert!(filter(&catalog, &no_ratings).is_empty());
        }
    }

    #[test]
    fn unknown_values_match_nothing() {
        let catalog = sample_catalog();
        let selection = FilterSelection::new(["Puzzle"], ["AO"], 3000);
        assert!(filter(&catalog, &selection).is_empty());
    }

    #[test]
    fn count_never_exceeds_catalog_size() {
        let catalog = sample_catalog();
        let everything = FilterSelection::new(
            catalog.genres().iter().cloned(),
            catalog.ratings().iter().cloned(),
            i32::MAX,
        );
        assert_eq!(filter(&catalog, &everything).len(), catalog.len());
        assert!(filter(&catalog, &default_selection()).len() <= catalog.len());
    }

    #[test]
    fn shrinking_the_selection_never_grows_the_result() {
        let catalog = sample_catalog();
        let wide = FilterSelection::new(
            catalog.genres().iter().cloned(),
            catalog.ratings().iter().cloned(),
            2012,
        );
        let fewer_genres = FilterSelection::new(["Sports", "Strategy"], wide.ratings.clone(), 2012);
        let fewer_ratings = FilterSelection::new(["Sports", "Strategy"], ["E"], 2012);
        let earlier = FilterSelection::new(["Sports", "Strategy"], ["E"], 2005);

        let sizes: Vec<usize> = [&wide, &fewer_genres, &fewer_ratings, &earlier]
            .iter()
            .map(|sel| filter(&catalog, sel).len())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]), "sizes: {sizes:?}");
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_catalog();
        let selection = default_selection();
        let once: Vec<GameRecord> = filter(&catalog, &selection).into_iter().cloned().collect();

        let narrowed = Catalog::from_records(once.clone());
        let twice: Vec<GameRecord> = filter(&narrowed, &selection).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn earliest_year_keeps_only_that_year() {
        let catalog = sample_catalog();
        let min_year = catalog.min_year().unwrap();
        let selection = FilterSelection::new(
            catalog.genres().iter().cloned(),
            catalog.ratings().iter().cloned(),
            min_year,
        );
        let result = filter(&catalog, &selection);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|rec| rec.release_year == Some(min_year)));
    }

    #[test]
    fn blank_cells_never_match() {
        let mut no_genre = game("Sports", "E", 2006, None);
        no_genre.genre = None;
        let mut no_rating = game("Sports", "E", 2006, None);
        no_rating.rating = None;
        let mut no_year = game("Sports", "E", 2006, None);
        no_year.release_year = None;

        let selection = FilterSelection::new(["Sports"], ["E"], i32::MAX);
        assert!(selection.matches(&game("Sports", "E", 2006, None)));
        for rec in [&no_genre, &no_rating, &no_year] {
            assert!(!selection.matches(rec), "{rec:?}");
        }
    }
}
