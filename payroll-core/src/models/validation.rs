use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a salary form submission is rejected.
///
/// Both are recoverable and user-facing: the `Display` text is meant to be
/// shown next to the form.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The worker name is empty or whitespace only.
    #[error("enter the worker's full name")]
    InvalidName,

    /// The salary is missing, not a number, not greater than zero, or above
    /// [`MAX_GROSS_SALARY`](crate::MAX_GROSS_SALARY).
    #[error("enter a valid salary greater than zero")]
    InvalidSalary,
}

/// Which field is checked first when both are invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOrder {
    #[default]
    NameFirst,
    SalaryFirst,
}
