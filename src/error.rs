use thiserror::Error;

/// Reasons a dataset file cannot be turned into a [`Catalog`](crate::data::model::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },
}
