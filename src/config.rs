use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CSV_PATH: &str = "problems.csv";
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 20;

/// Startup configuration, built once and handed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub csv_path: PathBuf,
    pub time_limit: Duration,
    pub shuffle: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            time_limit: Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            shuffle: false,
        }
    }
}
