/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<GameRecord>, genre/rating/year options
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  genre ∈ G ∧ rating ∈ R ∧ year ≤ Y → filtered subset
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
