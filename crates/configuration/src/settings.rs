use chrono::NaiveDate;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreSettings,
    pub analysis: AnalysisDefaults,
}

/// Where the read-only market data store lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Path to the SQLite file, relative to the working directory or absolute.
    pub path: String,
}

/// Defaults for commands that take a date range but were not given one.
/// These track the range the store is known to cover.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDefaults {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
