//! CSV batch mode: compute deductions for many workers at once.
//!
//! ## Input format
//!
//! | Column   | Required | Notes |
//! |----------|----------|-------|
//! | `name`   | yes      | Worker's full name |
//! | `salary` | yes      | Gross monthly salary, e.g. `50000.00` or `"50,000.00"` |
//!
//! Headers are matched by name and whitespace around values is ignored.
//! Rows are validated one by one: a row with a blank name or a bad salary is
//! reported in the output but does not stop the batch.
//!
//! ```csv
//! name,salary
//! Ana Pérez,50000
//! Luis Ruiz,8000.50
//! ```
//!
//! ## Output format
//!
//! `row,name,gross_salary,social_security,income_tax,total_deduction,net_salary,error`
//! with amounts at two decimal places. For rejected rows the amount cells are
//! empty and `error` holds the validation message.

use std::io::{Read, Write};
use std::path::Path;

use payroll_core::{SalaryCalculator, SalaryResult, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::format_amount;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One worker read from the batch file.
///
/// The salary stays as text so that unparseable values surface as
/// validation errors on their row rather than failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkerRecord {
    pub name: String,
    pub salary: String,
}

/// Outcome of computing one [`WorkerRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    pub name: String,
    pub result: Result<SalaryResult, ValidationError>,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    row: usize,
    name: &'a str,
    gross_salary: Option<String>,
    social_security: Option<String>,
    income_tax: Option<String>,
    total_deduction: Option<String>,
    net_salary: Option<String>,
    error: Option<String>,
}

impl<'a> From<&'a BatchOutcome> for ReportRow<'a> {
    fn from(outcome: &'a BatchOutcome) -> Self {
        let amounts = outcome.result.as_ref().ok();
        Self {
            row: outcome.row,
            name: outcome.name.trim(),
            gross_salary: amounts.map(|r| format_amount(r.gross_salary())),
            social_security: amounts.map(|r| format_amount(r.social_security())),
            income_tax: amounts.map(|r| format_amount(r.income_tax())),
            total_deduction: amounts.map(|r| format_amount(r.total_deduction())),
            net_salary: amounts.map(|r| format_amount(r.net_salary())),
            error: outcome.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while reading or writing batch files.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The CSV structure is invalid (missing column, wrong column count, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parses worker records from any reader. Rows are returned in file order.
///
/// # Errors
///
/// [`CsvLoadError::Csv`] if the CSV is structurally invalid.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<WorkerRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    reader
        .deserialize::<WorkerRecord>()
        .map(|row| row.map_err(CsvLoadError::from))
        .collect()
}

/// Parses worker records from CSV text.
pub fn load_from_str(input: &str) -> Result<Vec<WorkerRecord>, CsvLoadError> {
    load_from_reader(input.as_bytes())
}

/// Reads worker records from a file on disk.
pub fn load_from_file(path: &Path) -> Result<Vec<WorkerRecord>, CsvLoadError> {
    let file = std::fs::File::open(path)?;
    load_from_reader(file)
}

// ---------------------------------------------------------------------------
// Computing and reporting
// ---------------------------------------------------------------------------

/// Computes every record independently.
pub fn compute_batch(
    calculator: &SalaryCalculator,
    records: &[WorkerRecord],
) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| BatchOutcome {
            row: idx + 1,
            name: record.name.clone(),
            result: calculator.compute_from_text(&record.name, &record.salary),
        })
        .collect();

    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(total = outcomes.len(), rejected, "computed payroll batch");
    outcomes
}

/// Writes the outcomes as CSV, one line per input row.
///
/// # Errors
///
/// [`CsvLoadError`] if writing fails.
pub fn write_report<W: Write>(
    writer: W,
    outcomes: &[BatchOutcome],
) -> Result<(), CsvLoadError> {
    let mut writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        writer.serialize(ReportRow::from(outcome))?;
    }
    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const WORKERS_CSV: &str = "\
name,salary
Ana Pérez,50000
  Luis Ruiz  ,  8000
,1000
Marta Gómez,abc
Jon Díaz,\"15,000.00\"
";

    #[test]
    fn load_reads_rows_in_order_and_trims() {
        let records = load_from_str(WORKERS_CSV).unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(
            records[1],
            WorkerRecord {
                name: "Luis Ruiz".to_string(),
                salary: "8000".to_string(),
            }
        );
        assert_eq!(records[4].salary, "15,000.00");
    }

    #[test]
    fn load_rejects_missing_column() {
        let result = load_from_str("name\nAna\n");

        assert!(matches!(result, Err(CsvLoadError::Csv(_))));
    }

    #[test]
    fn load_rejects_extra_column() {
        let result = load_from_str("name,salary\nAna,1000,oops\n");

        assert!(matches!(result, Err(CsvLoadError::Csv(_))));
    }

    #[test]
    fn load_accepts_reordered_headers() {
        let records = load_from_str("salary,name\n1000,Ana\n").unwrap();

        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[0].salary, "1000");
    }

    #[test]
    fn compute_batch_keeps_going_after_invalid_rows() {
        let records = load_from_str(WORKERS_CSV).unwrap();

        let outcomes = compute_batch(&SalaryCalculator::default(), &records);

        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes[0].result.as_ref().unwrap().net_salary(), dec!(38175));
        assert_eq!(outcomes[2].row, 3);
        assert_eq!(outcomes[2].result, Err(ValidationError::InvalidName));
        assert_eq!(outcomes[3].result, Err(ValidationError::InvalidSalary));
        assert_eq!(
            outcomes[4].result.as_ref().unwrap().income_tax(),
            dec!(842.50)
        );
    }

    #[test]
    fn write_report_formats_amounts_and_errors() {
        let records = load_from_str("name,salary\nAna,50000\nLuis,-1\n").unwrap();
        let outcomes = compute_batch(&SalaryCalculator::default(), &records);
        let mut out = Vec::new();

        write_report(&mut out, &outcomes).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "row,name,gross_salary,social_security,income_tax,total_deduction,net_salary,error\n\
             1,Ana,50000.00,3500.00,8325.00,11825.00,38175.00,\n\
             2,Luis,,,,,,enter a valid salary greater than zero\n"
        );
    }
}
