use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings, built once in `main` and handed to the app.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Pre-normalized games table, resolved against the working directory.
    pub dataset_path: PathBuf,
    pub default_genres: Vec<String>,
    pub default_ratings: Vec<String>,
    pub default_year: i32,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("Norm_games.parquet"),
            default_genres: vec!["Sports".into(), "Strategy".into()],
            default_ratings: vec!["T".into(), "E".into()],
            default_year: 2008,
            window_title: "Состояние игровой индустрии".into(),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 600.0],
        }
    }
}
