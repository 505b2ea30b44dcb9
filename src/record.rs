// 🧾 Record - the transaction entity
// One income/expense entry, immutable once written to the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

// ============================================================================
// CATEGORY
// ============================================================================

/// Category - income or expense, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Label as persisted in the CSV file
    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Expense => "expense",
        }
    }

    /// Single-letter entry code
    pub fn code(&self) -> char {
        match self {
            Category::Income => 'I',
            Category::Expense => 'E',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the entry code (`I`/`E`, any case)
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "I" => Ok(Category::Income),
            "E" => Ok(Category::Expense),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

impl Record {
    pub fn new(date: NaiveDate, amount: f64, category: Category, description: impl Into<String>) -> Self {
        Record {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Inclusive on both ends
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}
