// ⚙️ Store configuration
// Passed explicitly into the store and summary engine - no globals

use std::path::{Path, PathBuf};

/// Default backing file, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "finance_data.csv";

/// Day-month-year, e.g. `05-03-2024`
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// CSV header, in column order
pub const COLUMNS: [&str; 4] = ["date", "amount", "category", "description"];

/// Human-readable form of a date format, for prompts (`%d-%m-%Y` -> `dd-mm-yyyy`)
pub fn date_hint(format: &str) -> String {
    format
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub date_format: String,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date_hint(&self) -> String {
        date_hint(&self.date_format)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_STORE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.path(), Path::new("finance_data.csv"));
        assert_eq!(config.date_format, "%d-%m-%Y");
        assert_eq!(config.date_hint(), "dd-mm-yyyy");
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::default()
            .with_path("/tmp/ledger.csv")
            .with_date_format("%Y-%m-%d");

        assert_eq!(config.path(), Path::new("/tmp/ledger.csv"));
        assert_eq!(config.date_hint(), "yyyy-mm-dd");
    }
}
