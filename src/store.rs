// 🗄️ Record Store - append-only CSV persistence
//
// One record per line under a fixed `date,amount,category,description` header.
// Lines are only ever appended, never rewritten.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;

use crate::config::{StoreConfig, COLUMNS};
use crate::record::{Category, Record};

// ============================================================================
// STORE TRAIT
// ============================================================================

pub trait RecordStore {
    /// Make sure the store exists. Safe to call on every startup.
    /// Returns `true` when something had to be created.
    fn initialize(&mut self) -> Result<bool>;

    fn add_entry(&mut self, record: &Record) -> Result<()>;

    /// All records, in insertion order
    fn read_all(&self) -> Result<Vec<Record>>;
}

// ============================================================================
// CSV ROW (on-disk shape)
// ============================================================================

/// Row as written to disk - the date stays a string so the configured
/// format can be applied on both sides
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    date: String,
    amount: f64,
    category: Category,
    description: String,
}

impl CsvRow {
    fn from_record(record: &Record, date_format: &str) -> Self {
        CsvRow {
            date: record.date.format(date_format).to_string(),
            amount: record.amount,
            category: record.category,
            description: record.description.clone(),
        }
    }

    fn into_record(self, date_format: &str) -> Result<Record> {
        let date = NaiveDate::parse_from_str(&self.date, date_format)
            .with_context(|| format!("Invalid date '{}' (expected {})", self.date, date_format))?;

        Ok(Record {
            date,
            amount: self.amount,
            category: self.category,
            description: self.description,
        })
    }
}

// ============================================================================
// CSV STORE
// ============================================================================

pub struct CsvStore {
    config: StoreConfig,
}

impl CsvStore {
    pub fn new(config: StoreConfig) -> Self {
        CsvStore { config }
    }

    /// Open and initialize in one step
    pub fn open(config: StoreConfig) -> Result<Self> {
        let mut store = CsvStore::new(config);
        store.initialize()?;
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn write_header(&self) -> Result<()> {
        let path = self.config.path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        wtr.write_record(COLUMNS)?;
        wtr.flush()?;

        Ok(())
    }
}

impl RecordStore for CsvStore {
    fn initialize(&mut self) -> Result<bool> {
        let path = self.config.path();

        match fs::metadata(path) {
            Ok(meta) if meta.len() > 0 => {
                tracing::debug!(path = %path.display(), "store already initialized");
                Ok(false)
            }
            Ok(_) => {
                // Zero-length file: nothing to lose, give it a header
                self.write_header()?;
                tracing::info!(path = %path.display(), "wrote header to empty store");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write_header()?;
                tracing::info!(path = %path.display(), "created new store");
                Ok(true)
            }
            Err(e) => Err(e).with_context(|| format!("Failed to inspect {}", path.display())),
        }
    }

    fn add_entry(&mut self, record: &Record) -> Result<()> {
        if !self.config.path().exists() {
            self.initialize()?;
        }

        let path = self.config.path();
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {} for append", path.display()))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(CsvRow::from_record(record, &self.config.date_format))
            .context("Failed to serialize record")?;
        wtr.flush()?;

        tracing::info!(
            date = %record.date,
            amount = record.amount,
            category = %record.category,
            "entry added"
        );

        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        let path = self.config.path();

        if !path.exists() {
            tracing::warn!(path = %path.display(), "store file missing, treating as empty");
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let headers = rdr.headers().context("Failed to read CSV header")?.clone();
        let mut raw = csv::StringRecord::new();
        let mut records = Vec::new();

        while rdr.read_record(&mut raw).context("Failed to read CSV record")? {
            // Line where the record starts; quoted fields may span several
            let line = raw.position().map(|p| p.line()).unwrap_or_default();
            let row: CsvRow = raw
                .deserialize(Some(&headers))
                .with_context(|| format!("Failed to read record on line {}", line))?;
            let record = row
                .into_record(&self.config.date_format)
                .with_context(|| format!("Bad record on line {}", line))?;
            records.push(record);
        }

        tracing::debug!(count = records.len(), path = %path.display(), "records loaded");

        Ok(records)
    }
}

// ============================================================================
// MEMORY STORE
// ============================================================================

/// Store backed by a `Vec`, for tests and previews
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        MemoryStore { records }
    }
}

impl RecordStore for MemoryStore {
    fn initialize(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn add_entry(&mut self, record: &Record) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}
