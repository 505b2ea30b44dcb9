// ✅ Field Validator
// Turns raw user-entered strings into typed record fields.
//
// Every function returns a Result; none of them loop or prompt.
// Retrying is up to the caller (CLI re-prompts, TUI shows a status message).

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::date_hint;
use crate::record::{Category, Record};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid date format '{input}'. Please enter the date in {hint} format")]
    InvalidDate { input: String, hint: String },
    #[error("Amount must be a number, got '{0}'")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),
    #[error("Invalid category '{0}'. Please enter I or E for income and expense respectively")]
    UnknownCategory(String),
    #[error("The {0} field is required")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Name of the field this error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate { .. } => "date",
            ValidationError::InvalidAmount(_) | ValidationError::NonPositiveAmount(_) => "amount",
            ValidationError::UnknownCategory(_) => "category",
            ValidationError::MissingField(field) => field,
        }
    }
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), format)
        .map_err(|_| ValidationError::InvalidDate {
            input: input.to_string(),
            hint: date_hint(format),
        })
}

/// Same as [`parse_date`], but an empty input yields `today`
pub fn parse_date_or_today(
    input: &str,
    format: &str,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if input.trim().is_empty() {
        return Ok(today);
    }
    parse_date(input, format)
}

pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(input.to_string()))?;

    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(input.to_string()));
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }

    Ok(amount)
}

pub fn parse_category(input: &str) -> Result<Category, ValidationError> {
    input.parse()
}

/// Kept verbatim, only emptiness is rejected
pub fn parse_description(input: &str) -> Result<String, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::MissingField("description"));
    }
    Ok(input.to_string())
}

// ============================================================================
// ENTRY FORM
// ============================================================================

/// Raw field values as typed into a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl EntryForm {
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        EntryForm {
            date: date.into(),
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Validate every field and build a record.
    ///
    /// Amount, category and description must be filled in; an empty date
    /// means `today`. Returns the first error found, in field order.
    pub fn validate(&self, date_format: &str, today: NaiveDate) -> Result<Record, ValidationError> {
        for (name, value) in [
            ("amount", &self.amount),
            ("category", &self.category),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }

        let date = parse_date_or_today(&self.date, date_format, today)?;
        let amount = parse_amount(&self.amount)?;
        let category = parse_category(&self.category)?;
        let description = parse_description(&self.description)?;

        Ok(Record::new(date, amount, category, description))
    }

    pub fn clear(&mut self) {
        *self = EntryForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%d-%m-%Y";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_date_round_trip() {
        for input in ["01-01-2024", "29-02-2024", "31-12-1999", "15-06-2030"] {
            let date = parse_date(input, FORMAT).unwrap();
            assert_eq!(date.format(FORMAT).to_string(), input);
        }
    }

    #[test]
    fn test_invalid_dates_rejected() {
        for input in ["", "2024-01-01", "32-01-2024", "29-02-2023", "01/01/2024", "yesterday"] {
            let err = parse_date(input, FORMAT).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidDate {
                    input: input.to_string(),
                    hint: "dd-mm-yyyy".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_invalid_date_names_configured_format() {
        let err = parse_date("01-01-2024", "%Y-%m-%d").unwrap_err();

        assert_eq!(err.field(), "date");
        assert_eq!(
            err.to_string(),
            "Invalid date format '01-01-2024'. Please enter the date in yyyy-mm-dd format"
        );
    }

    #[test]
    fn test_empty_date_defaults_to_today() {
        assert_eq!(parse_date_or_today("", FORMAT, today()).unwrap(), today());
        assert_eq!(parse_date_or_today("   ", FORMAT, today()).unwrap(), today());
        assert_eq!(
            parse_date_or_today("02-01-2024", FORMAT, today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(parse_date_or_today("nope", FORMAT, today()).is_err());
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 0.01 ").unwrap(), 0.01);
        assert_eq!(parse_amount("1e3").unwrap(), 1000.0);

        assert_eq!(parse_amount("0").unwrap_err(), ValidationError::NonPositiveAmount(0.0));
        assert_eq!(parse_amount("-5").unwrap_err(), ValidationError::NonPositiveAmount(-5.0));
        assert!(matches!(parse_amount("abc"), Err(ValidationError::InvalidAmount(_))));
        assert!(matches!(parse_amount(""), Err(ValidationError::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(ValidationError::InvalidAmount(_))));
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_category_validation() {
        assert_eq!(parse_category("i").unwrap(), Category::Income);
        assert_eq!(parse_category("I").unwrap(), Category::Income);
        assert_eq!(parse_category("e").unwrap(), Category::Expense);
        assert_eq!(parse_category("E").unwrap(), Category::Expense);

        for input in ["", "x", "IE", "expense", "1", " I", "e ", "\tE", "e\t"] {
            assert_eq!(
                parse_category(input).unwrap_err(),
                ValidationError::UnknownCategory(input.to_string())
            );
        }
    }

    #[test]
    fn test_description_kept_verbatim() {
        assert_eq!(parse_description("  Rent, March ").unwrap(), "  Rent, March ");
        assert_eq!(
            parse_description(" ").unwrap_err(),
            ValidationError::MissingField("description")
        );
    }

    #[test]
    fn test_form_validation() {
        let form = EntryForm::new("01-01-2024", "100", "i", "Salary");
        let record = form.validate(FORMAT, today()).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.amount, 100.0);
        assert_eq!(record.category, Category::Income);
        assert_eq!(record.description, "Salary");
    }

    #[test]
    fn test_form_reports_missing_fields_first() {
        let form = EntryForm::new("not a date", "", "E", "Coffee");
        let err = form.validate(FORMAT, today()).unwrap_err();

        assert_eq!(err, ValidationError::MissingField("amount"));
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn test_form_empty_date_uses_today() {
        let form = EntryForm::new("", "4.50", "e", "Coffee");
        let record = form.validate(FORMAT, today()).unwrap();

        assert_eq!(record.date, today());
        assert_eq!(record.category, Category::Expense);
    }

    #[test]
    fn test_form_field_errors() {
        let err = EntryForm::new("01-01-2024", "-3", "E", "Refund")
            .validate(FORMAT, today())
            .unwrap_err();
        assert_eq!(err.field(), "amount");

        let err = EntryForm::new("01-01-2024", "3", "Z", "Refund")
            .validate(FORMAT, today())
            .unwrap_err();
        assert_eq!(err.field(), "category");
    }
}
