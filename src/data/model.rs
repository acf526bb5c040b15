use std::collections::{BTreeSet, HashSet};

// ---------------------------------------------------------------------------
// Column names of the normalized games table
// ---------------------------------------------------------------------------

pub const COL_TITLE: &str = "Name";
pub const COL_GENRE: &str = "Genre";
pub const COL_RATING: &str = "Rating";
pub const COL_YEAR: &str = "Year_of_Release";
pub const COL_CRITIC_SCORE: &str = "Critic_Score";
pub const COL_USER_SCORE: &str = "User_Score";

// ---------------------------------------------------------------------------
// GameRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single game (one row of the source table).
///
/// Empty genre, rating or year cells load as `None`; such a game stays in
/// the catalog but never passes a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Display only; never filtered on.
    pub title: Option<String>,
    pub genre: Option<String>,
    /// Age-rating class such as `E`, `T`, `M`.
    pub rating: Option<String>,
    pub release_year: Option<i32>,
    pub critic_score: Option<f64>,
    pub user_score: Option<f64>,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full, read-only collection of games with pre-computed option lists.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<GameRecord>,
    /// Distinct genres in order of first appearance.
    genres: Vec<String>,
    /// Distinct ratings in order of first appearance.
    ratings: Vec<String>,
    /// Distinct release years, ascending.
    years: Vec<i32>,
}

impl Catalog {
    /// Build the option lists from the loaded records.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let mut genres = Vec::new();
        let mut ratings = Vec::new();
        let mut seen_genres = HashSet::new();
        let mut seen_ratings = HashSet::new();
        let mut years = BTreeSet::new();

        for rec in &records {
            if let Some(genre) = rec.genre.as_deref() {
                if seen_genres.insert(genre) {
                    genres.push(genre.to_string());
                }
            }
            if let Some(rating) = rec.rating.as_deref() {
                if seen_ratings.insert(rating) {
                    ratings.push(rating.to_string());
                }
            }
            years.extend(rec.release_year);
        }

        Catalog {
            genres,
            ratings,
            years: years.into_iter().collect(),
            records,
        }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn ratings(&self) -> &[String] {
        &self.ratings
    }

    /// Slider stops: every release year present in the catalog.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn min_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn max_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn game(genre: &str, rating: &str, year: i32, scores: Option<(f64, f64)>) -> GameRecord {
        GameRecord {
            title: Some(format!("{genre} {rating} {year}")),
            genre: Some(genre.to_string()),
            rating: Some(rating.to_string()),
            release_year: Some(year),
            critic_score: scores.map(|(critic, _)| critic),
            user_score: scores.map(|(_, user)| user),
        }
    }

    /// Small mixed catalog shared by the filter, view and state tests.
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::from_records(vec![
            game("Sports", "E", 2006, Some((76.0, 8.0))),
            game("Action", "M", 2008, Some((90.0, 8.5))),
            game("Strategy", "T", 2008, Some((81.0, 7.9))),
            game("Sports", "T", 2010, None),
            game("Strategy", "E", 2001, Some((70.0, 6.4))),
            game("Racing", "E", 2008, Some((82.0, 8.3))),
            game("Sports", "E", 2008, Some((88.0, 7.1))),
            game("Strategy", "E10+", 2012, Some((74.0, 6.9))),
            game("Sports", "T", 2004, Some((65.0, 5.5))),
            game("Action", "T", 2001, Some((59.0, 6.0))),
        ])
    }

    #[test]
    fn option_lists_follow_first_appearance() {
        let catalog = sample_catalog();
        assert_eq!(catalog.genres(), ["Sports", "Action", "Strategy", "Racing"]);
        assert_eq!(catalog.ratings(), ["E", "M", "T", "E10+"]);
    }

    #[test]
    fn years_are_distinct_and_sorted() {
        let catalog = sample_catalog();
        assert_eq!(catalog.years(), [2001, 2004, 2006, 2008, 2010, 2012]);
        assert_eq!(catalog.min_year(), Some(2001));
        assert_eq!(catalog.max_year(), Some(2012));
    }

    #[test]
    fn blank_categories_are_not_offered_as_options() {
        let mut blank = game("Puzzle", "E", 2009, None);
        blank.rating = None;
        blank.release_year = None;
        let catalog = Catalog::from_records(vec![game("Sports", "T", 2008, None), blank]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.genres(), ["Sports", "Puzzle"]);
        assert_eq!(catalog.ratings(), ["T"]);
        assert_eq!(catalog.years(), [2008]);
    }

    #[test]
    fn empty_catalog_has_no_options() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.genres().is_empty());
        assert_eq!(catalog.min_year(), None);
    }
}
