//! Derived views over a filtered subset: the count message, the
//! year/rating histogram and the user/critic score scatter.

use std::collections::BTreeMap;

use crate::data::model::GameRecord;

pub const HISTOGRAM_TITLE: &str = "Гистограмма рейтингов игр по годам";
pub const HISTOGRAM_X_LABEL: &str = "Год релиза игр";
pub const HISTOGRAM_Y_LABEL: &str = "Кол-во";
pub const HISTOGRAM_LEGEND: &str = "Рейтинг";

pub const SCATTER_TITLE: &str = "Зависимость оценок от жанров";
pub const SCATTER_X_LABEL: &str = "Оценка пользователей";
pub const SCATTER_Y_LABEL: &str = "Оценка критиков";
pub const SCATTER_LEGEND: &str = "Жанр";

/// Text shown above the charts.
pub fn count_message(count: usize) -> String {
    format!("Результат фильтрации: {count}")
}

/// Position of `key` in `groups`, appending a new group on first sight.
fn group_slot<T>(
    groups: &mut Vec<T>,
    key: &str,
    name: impl Fn(&T) -> &str,
    new: impl FnOnce() -> T,
) -> usize {
    match groups.iter().position(|g| name(g) == key) {
        Some(i) => i,
        None => {
            groups.push(new());
            groups.len() - 1
        }
    }
}

// ---------------------------------------------------------------------------
// Histogram: games per release year, stacked by rating
// ---------------------------------------------------------------------------

/// Per-rating counts for one stack layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub rating: String,
    /// release year → number of games
    pub counts: BTreeMap<i32, usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingHistogram {
    /// Ratings in order of first appearance in the subset.
    pub series: Vec<HistogramSeries>,
}

impl RatingHistogram {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut series: Vec<HistogramSeries> = Vec::new();
        for rec in records {
            let (Some(rating), Some(year)) = (rec.rating.as_deref(), rec.release_year) else {
                continue;
            };
            let slot = group_slot(
                &mut series,
                rating,
                |s| s.rating.as_str(),
                || HistogramSeries {
                    rating: rating.to_string(),
                    counts: BTreeMap::new(),
                },
            );
            *series[slot].counts.entry(year).or_default() += 1;
        }
        RatingHistogram { series }
    }

    /// Every year with at least one game, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .series
            .iter()
            .flat_map(|s| s.counts.keys().copied())
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Height of the full stack for `year`.
    pub fn total_for_year(&self, year: i32) -> usize {
        self.series
            .iter()
            .filter_map(|s| s.counts.get(&year))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Scatter: user score vs critic score, coloured by genre
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub genre: String,
    /// `[user_score, critic_score]` pairs.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScorePlot {
    /// Genres in order of first appearance in the subset.
    pub series: Vec<ScatterSeries>,
    /// Games left out because a score or the genre was missing.
    pub omitted: usize,
}

impl ScorePlot {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut plot = ScorePlot::default();
        for rec in records {
            let (Some(genre), Some(user), Some(critic)) =
                (rec.genre.as_deref(), rec.user_score, rec.critic_score)
            else {
                plot.omitted += 1;
                continue;
            };
            let slot = group_slot(
                &mut plot.series,
                genre,
                |s| s.genre.as_str(),
                || ScatterSeries {
                    genre: genre.to_string(),
                    points: Vec::new(),
                },
            );
            plot.series[slot].points.push([user, critic]);
        }
        plot
    }

    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
