// 💻 Command-line front-end
// Argument parsing, logging setup and the `add` / `summary` commands

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use finance_tracker::{
    parse_amount, parse_category, parse_date, parse_date_or_today, parse_description, summarize,
    CsvStore, Record, RecordStore, StoreConfig, Summary, ValidationError, DEFAULT_STORE_PATH,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

// ============================================================================
// ARGUMENTS
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "finance-tracker", version, about = "Track income and expenses in a CSV file")]
pub struct Args {
    /// CSV file holding the transactions
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    pub file: PathBuf,

    /// Log filter, e.g. `info` or `finance_tracker=debug` (RUST_LOG wins if set)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a transaction; missing fields are asked for interactively
    Add {
        /// dd-mm-yyyy, empty for today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        /// I for income, E for expense
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Totals and net savings between two dates (inclusive)
    Summary {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive terminal UI (default)
    Tui,
}

impl Args {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.file)
    }
}

// ============================================================================
// LOGGING
// ============================================================================

pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

// ============================================================================
// PROMPTS
// ============================================================================

fn input(prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Ask until `parse` accepts the answer. No retry limit.
fn prompt_until<T>(prompt: &str, parse: impl Fn(&str) -> Result<T, ValidationError>) -> Result<T> {
    loop {
        let raw = input(prompt)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => eprintln!("{}", err),
        }
    }
}

/// Use the flag value if given (errors are fatal), otherwise prompt
fn field<T>(
    given: Option<&str>,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T> {
    match given {
        Some(raw) => Ok(parse(raw)?),
        None => prompt_until(prompt, parse),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn run_add(
    config: StoreConfig,
    date: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut store = CsvStore::open(config)?;
    let format = store.config().date_format.clone();
    let hint = store.config().date_hint();
    let today = today();

    let date = field(
        date.as_deref(),
        &format!("Enter the date of the transaction ({}) or press enter for today", hint),
        |s| parse_date_or_today(s, &format, today),
    )?;
    let amount = field(amount.as_deref(), "Enter the amount", parse_amount)?;
    let category = field(
        category.as_deref(),
        "Enter the category ('I' for income or 'E' for expense)",
        parse_category,
    )?;
    let description = field(description.as_deref(), "Enter a description", parse_description)?;

    let record = Record::new(date, amount, category, description);
    store.add_entry(&record)?;

    println!("Entry added successfully!");

    Ok(())
}

pub fn run_summary(
    config: StoreConfig,
    start: Option<String>,
    end: Option<String>,
    json: bool,
) -> Result<()> {
    let store = CsvStore::open(config)?;
    let format = store.config().date_format.clone();
    let hint = store.config().date_hint();

    let start = field(
        start.as_deref(),
        &format!("Enter the start date ({})", hint),
        |s| parse_date(s, &format),
    )?;
    let end = field(
        end.as_deref(),
        &format!("Enter the end date ({})", hint),
        |s| parse_date(s, &format),
    )?;

    let summary = summarize(&store, start, end)?;

    if json {
        println!("{}", summary_json(&summary, &format)?);
    } else {
        print_summary(&summary, &format);
    }

    Ok(())
}

fn summary_json(summary: &Summary, date_format: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summary.report(date_format))?)
}

fn print_summary(summary: &Summary, date_format: &str) {
    println!(
        "Transactions from {} to {}",
        summary.start.format(date_format),
        summary.end.format(date_format)
    );

    if summary.is_empty() {
        println!("{}", summary);
        return;
    }

    println!("{:<12} {:>12} {:<8} Description", "Date", "Amount", "Category");
    for record in &summary.records {
        println!(
            "{:<12} {:>12.2} {:<8} {}",
            record.date.format(date_format).to_string(),
            record.amount,
            record.category.label(),
            record.description
        );
    }
    println!();
    println!("{}", summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_tracker::{Category, MemoryStore};

    #[test]
    fn test_parse_add_flags() {
        let args = Args::parse_from([
            "finance-tracker",
            "--file",
            "ledger.csv",
            "add",
            "--date",
            "01-01-2024",
            "--amount",
            "100",
            "--category",
            "I",
            "--description",
            "Salary",
        ]);

        assert_eq!(args.store_config().path(), Path::new("ledger.csv"));
        match args.command {
            Some(Command::Add { amount, category, .. }) => {
                assert_eq!(amount.as_deref(), Some("100"));
                assert_eq!(category.as_deref(), Some("I"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_command_is_none() {
        let args = Args::parse_from(["finance-tracker"]);
        assert!(args.command.is_none());
        assert_eq!(args.file, PathBuf::from("finance_data.csv"));
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_flag_value_errors_are_fatal() {
        let result = field(Some("zero"), "unused", parse_amount);
        assert!(result.is_err());

        let value = field(Some("2.5"), "unused", parse_amount).unwrap();
        assert_eq!(value, 2.5);
    }

    #[test]
    fn test_run_add_with_all_flags() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("data.csv"));

        run_add(
            config.clone(),
            Some("02-01-2024".into()),
            Some("40".into()),
            Some("e".into()),
            Some("Groceries".into()),
        )
        .unwrap();

        let records = CsvStore::new(config).read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Expense);
        assert_eq!(records[0].amount, 40.0);
    }

    #[test]
    fn test_summary_json_fields() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let store = MemoryStore::with_records(vec![
            Record::new(date(1), 100.0, Category::Income, "Salary"),
            Record::new(date(2), 40.0, Category::Expense, "Groceries"),
        ]);
        let summary = summarize(&store, date(1), date(2)).unwrap();

        let json = summary_json(&summary, "%d-%m-%Y").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["net_savings"], 60.0);
        assert_eq!(value["daily"].as_array().unwrap().len(), 2);
        assert_eq!(value["daily"][1]["expense"], 40.0);
        assert_eq!(value["start"], "01-01-2024");
        assert_eq!(value["records"][1]["date"], "02-01-2024");
    }
}
