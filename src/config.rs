use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "classroom.log";

/// Runtime settings handed to the store, logger and dispatcher at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the persisted roster document.
    pub data_path: PathBuf,
    /// Directory holding the append-only log file.
    pub log_dir: PathBuf,
    /// Mirror log records to stderr in addition to the log file.
    pub verbose: bool,
    /// Answer the truncate confirmation with "yes" without prompting.
    pub assume_yes: bool,
}

impl Config {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Config { data_path: data_path.into(), ..Config::default() }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            verbose: false,
            assume_yes: false,
        }
    }
}
