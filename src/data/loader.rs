use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{
    Catalog, GameRecord, COL_CRITIC_SCORE, COL_GENRE, COL_RATING, COL_TITLE, COL_USER_SCORE,
    COL_YEAR,
};
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the game catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – columnar table as written by `df.to_parquet()` (recommended)
/// * `.json`    – `[{ "Genre": ..., "Rating": ..., ... }, ...]`
/// * `.csv`     – header row with the column names
///
/// Required columns are `Genre`, `Rating`, `Year_of_Release`,
/// `Critic_Score` and `User_Score`; `Name` is read when present and every
/// other column is ignored.  Blank cells load as missing values; only a
/// missing column or an unreadable year fails the load.
pub fn load_file(path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path)?,
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(CatalogError::UnsupportedExtension(other.to_string()).into()),
    };

    Ok(Catalog::from_records(records))
}

/// Years arrive as integers or, when the source frame held NaNs, as floats.
/// A NaN year is a blank cell.
fn year_from_f64(value: Option<f64>, row: usize) -> Result<Option<i32>, CatalogError> {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return Ok(None);
    };
    let in_range = value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX);
    if in_range {
        Ok(Some(value as i32))
    } else {
        Err(CatalogError::InvalidValue {
            column: COL_YEAR.to_string(),
            row,
            value: value.to_string(),
        })
    }
}

fn score(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One element of the records-oriented JSON array
/// (`df.to_json(orient='records')`).
#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(rename = "Name")]
    title: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Rating")]
    rating: Option<String>,
    #[serde(rename = "Year_of_Release")]
    year: Option<f64>,
    #[serde(rename = "Critic_Score")]
    critic_score: Option<f64>,
    #[serde(rename = "User_Score")]
    user_score: Option<f64>,
}

fn load_json(path: &Path) -> Result<Vec<GameRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<JsonRow> = serde_json::from_str(&text).context("parsing JSON")?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| -> Result<GameRecord> {
            Ok(GameRecord {
                title: row.title,
                genre: row.genre,
                rating: row.rating,
                release_year: year_from_f64(row.year, i)?,
                critic_score: score(row.critic_score),
                user_score: score(row.user_score),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, empty cells for missing values.
/// Scores that do not parse as numbers (`tbd`, `nan`) count as missing.
fn load_csv(path: &Path) -> Result<Vec<GameRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let position = |name: &str| headers.iter().position(|h| h == name);
    let column = |name: &str| -> Result<usize, CatalogError> {
        position(name).ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
    };

    let title_idx = position(COL_TITLE);
    let genre_idx = column(COL_GENRE)?;
    let rating_idx = column(COL_RATING)?;
    let year_idx = column(COL_YEAR)?;
    let critic_idx = column(COL_CRITIC_SCORE)?;
    let user_idx = column(COL_USER_SCORE)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let cell = |idx: usize| record.get(idx).map(str::trim).filter(|s| !s.is_empty());

        let year = cell(year_idx)
            .map(|text| {
                text.parse::<f64>().map_err(|_| CatalogError::InvalidValue {
                    column: COL_YEAR.to_string(),
                    row: row_no,
                    value: text.to_string(),
                })
            })
            .transpose()?;

        records.push(GameRecord {
            title: title_idx.and_then(|idx| cell(idx)).map(str::to_string),
            genre: cell(genre_idx).map(str::to_string),
            rating: cell(rating_idx).map(str::to_string),
            release_year: year_from_f64(year, row_no)?,
            critic_score: score(cell(critic_idx).and_then(|s| s.parse().ok())),
            user_score: score(cell(user_idx).and_then(|s| s.parse().ok())),
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing the games table.
///
/// Column types are normalized with Arrow casts, so integer or float years,
/// `Utf8`/`LargeUtf8`/dictionary strings and any numeric score type are
/// accepted.  Works with files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Vec<GameRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = records.len();
        append_batch(&batch, offset, &mut records)?;
    }

    Ok(records)
}

/// Convert one record batch; `offset` keeps row numbers in error messages
/// relative to the whole file.
fn append_batch(batch: &RecordBatch, offset: usize, out: &mut Vec<GameRecord>) -> Result<()> {
    let titles = batch
        .column_by_name(COL_TITLE)
        .map(|col| cast_column(col, COL_TITLE, &DataType::Utf8))
        .transpose()?;
    let genres = cast_column(batch_column(batch, COL_GENRE)?, COL_GENRE, &DataType::Utf8)?;
    let ratings = cast_column(batch_column(batch, COL_RATING)?, COL_RATING, &DataType::Utf8)?;
    let years = cast_column(batch_column(batch, COL_YEAR)?, COL_YEAR, &DataType::Float64)?;
    let critic = cast_column(
        batch_column(batch, COL_CRITIC_SCORE)?,
        COL_CRITIC_SCORE,
        &DataType::Float64,
    )?;
    let user = cast_column(
        batch_column(batch, COL_USER_SCORE)?,
        COL_USER_SCORE,
        &DataType::Float64,
    )?;

    let titles = titles.as_ref().map(|col| col.as_string::<i32>());
    let genres = genres.as_string::<i32>();
    let ratings = ratings.as_string::<i32>();
    let years = years.as_primitive::<Float64Type>();
    let critic = critic.as_primitive::<Float64Type>();
    let user = user.as_primitive::<Float64Type>();

    let string_at = |arr: &arrow::array::StringArray, i: usize| {
        (!arr.is_null(i)).then(|| arr.value(i).to_string())
    };
    let f64_at = |arr: &arrow::array::Float64Array, i: usize| {
        (!arr.is_null(i)).then(|| arr.value(i))
    };

    for i in 0..batch.num_rows() {
        let row = offset + i;
        out.push(GameRecord {
            title: titles.and_then(|arr| string_at(arr, i)),
            genre: string_at(genres, i),
            rating: string_at(ratings, i),
            release_year: year_from_f64(f64_at(years, i), row)?,
            critic_score: score(f64_at(critic, i)),
            user_score: score(f64_at(user, i)),
        });
    }

    Ok(())
}

fn batch_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef, CatalogError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
}

fn cast_column(col: &ArrayRef, name: &str, to: &DataType) -> Result<ArrayRef> {
    cast(col, to).with_context(|| {
        format!("column '{name}': cannot read {:?} as {to:?}", col.data_type())
    })
}
