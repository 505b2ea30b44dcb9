// 📊 Query / Aggregation Engine
// Date-range filter, per-category totals, net savings and a daily series

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::record::{Category, Record};
use crate::store::RecordStore;

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Matching records, in insertion order
    pub records: Vec<Record>,
    pub total_income: f64,
    pub total_expense: f64,
}

impl Summary {
    /// Keep records with `start <= date <= end` and total them up.
    /// An inverted range is not an error, it just matches nothing.
    pub fn from_records(records: Vec<Record>, start: NaiveDate, end: NaiveDate) -> Self {
        let records: Vec<Record> = records
            .into_iter()
            .filter(|r| r.within(start, end))
            .collect();

        let total_income = total_for(&records, Category::Income);
        let total_expense = total_for(&records, Category::Expense);

        Summary {
            start,
            end,
            records,
            total_income,
            total_expense,
        }
    }

    pub fn net_savings(&self) -> f64 {
        self.total_income - self.total_expense
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn total(&self, category: Category) -> f64 {
        match category {
            Category::Income => self.total_income,
            Category::Expense => self.total_expense,
        }
    }

    /// Serializable view with dates rendered in `date_format`
    pub fn report(&self, date_format: &str) -> SummaryReport {
        let fmt_date = |date: NaiveDate| date.format(date_format).to_string();

        SummaryReport {
            start: fmt_date(self.start),
            end: fmt_date(self.end),
            total_income: self.total_income,
            total_expense: self.total_expense,
            net_savings: self.net_savings(),
            records: self
                .records
                .iter()
                .map(|r| ReportRecord {
                    date: fmt_date(r.date),
                    amount: r.amount,
                    category: r.category,
                    description: r.description.clone(),
                })
                .collect(),
            daily: self
                .daily_series()
                .points
                .iter()
                .map(|p| ReportPoint {
                    date: fmt_date(p.date),
                    income: p.income,
                    expense: p.expense,
                })
                .collect(),
        }
    }

    /// One point per distinct date in the result, ascending.
    /// A category with no record on a given date contributes 0.0.
    pub fn daily_series(&self) -> DailySeries {
        let mut days: BTreeMap<NaiveDate, DailyPoint> = BTreeMap::new();

        for record in &self.records {
            let point = days.entry(record.date).or_insert_with(|| DailyPoint {
                date: record.date,
                income: 0.0,
                expense: 0.0,
            });
            match record.category {
                Category::Income => point.income += record.amount,
                Category::Expense => point.expense += record.amount,
            }
        }

        DailySeries {
            points: days.into_values().collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No transactions found");
        }
        writeln!(f, "Total income: {:.2}", self.total_income)?;
        writeln!(f, "Total expense: {:.2}", self.total_expense)?;
        write!(f, "Net savings: {:.2}", self.net_savings())
    }
}

fn total_for(records: &[Record], category: Category) -> f64 {
    records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.amount)
        .sum()
}

/// Load everything from `store` and summarize `[start, end]`
pub fn summarize<S: RecordStore + ?Sized>(
    store: &S,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Summary> {
    let summary = Summary::from_records(store.read_all()?, start, end);

    if summary.is_empty() {
        tracing::info!(%start, %end, "No transactions found");
    } else {
        tracing::info!(
            %start,
            %end,
            count = summary.len(),
            total_income = summary.total_income,
            total_expense = summary.total_expense,
            "summary computed"
        );
    }

    Ok(summary)
}

// ============================================================================
// REPORT (JSON shape)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub start: String,
    pub end: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
    pub records: Vec<ReportRecord>,
    pub daily: Vec<ReportPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub date: String,
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPoint {
    pub date: String,
    pub income: f64,
    pub expense: f64,
}

// ============================================================================
// DAILY SERIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

impl DailyPoint {
    pub fn amount(&self, category: Category) -> f64 {
        match category {
            Category::Income => self.income,
            Category::Expense => self.expense,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    pub points: Vec<DailyPoint>,
}

impl DailySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(date, amount)` pairs for one category
    pub fn series(&self, category: Category) -> Vec<(NaiveDate, f64)> {
        self.points
            .iter()
            .map(|p| (p.date, p.amount(category)))
            .collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Largest single-day amount across both categories
    pub fn max_amount(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.income.max(p.expense))
            .fold(0.0, f64::max)
    }
}
