// Personal Finance Tracker - Core Library
// Validation, CSV store and summaries, shared by the CLI and the TUI

pub mod config;
pub mod record;
pub mod store;
pub mod summary;
pub mod validation;

// Re-export commonly used types
pub use config::{date_hint, StoreConfig, COLUMNS, DEFAULT_DATE_FORMAT, DEFAULT_STORE_PATH};
pub use record::{Category, Record};
pub use store::{CsvStore, MemoryStore, RecordStore};
pub use summary::{
    summarize, DailyPoint, DailySeries, ReportPoint, ReportRecord, Summary, SummaryReport,
};
pub use validation::{
    parse_amount, parse_category, parse_date, parse_date_or_today, parse_description,
    EntryForm, ValidationError,
};

