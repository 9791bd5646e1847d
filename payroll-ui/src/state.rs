//! View-state for the salary form.
//!
//! The form is a single immutable [`FormState`] value. Every user action
//! produces a brand new state through [`FormState::apply`]; nothing is
//! mutated field by field.

use payroll_core::{SalaryCalculator, SalaryResult};
use tracing::debug;

use crate::models::SalaryReport;

/// Something the user did on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// The name field now holds this text.
    EditName(String),
    /// The salary field now holds this text.
    EditSalary(String),
    /// "Calculate" was pressed.
    Calculate,
    /// "New" was pressed: clear fields, error and result.
    Reset,
}

/// Everything the form shows at one point in time.
///
/// `error` and `result` are never both set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub salary_text: String,
    pub error: Option<String>,
    pub result: Option<SalaryResult>,
}

impl FormState {
    /// Returns the state that follows `action`.
    ///
    /// A failed calculation drops any earlier result, and a successful one
    /// drops any earlier error message.
    pub fn apply(
        self,
        action: FormAction,
        calculator: &SalaryCalculator,
    ) -> FormState {
        match action {
            FormAction::EditName(name) => FormState { name, ..self },
            FormAction::EditSalary(salary_text) => FormState {
                salary_text,
                ..self
            },
            FormAction::Calculate => {
                match calculator.compute_from_text(&self.name, &self.salary_text) {
                    Ok(result) => FormState {
                        error: None,
                        result: Some(result),
                        ..self
                    },
                    Err(error) => FormState {
                        error: Some(error.to_string()),
                        result: None,
                        ..self
                    },
                }
            }
            FormAction::Reset => {
                debug!("form reset");
                FormState::default()
            }
        }
    }

    /// The report for the current result, if there is one.
    pub fn report(&self) -> Option<SalaryReport<'_>> {
        self.result
            .as_ref()
            .map(|result| SalaryReport::new(&self.name, result))
    }
}
