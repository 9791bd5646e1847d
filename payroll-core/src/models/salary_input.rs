use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{ValidationError, ValidationOrder};

/// Largest gross monthly salary accepted (one quadrillion).
///
/// Keeps every intermediate product of the deduction formulas (the annualized
/// net income in particular) well inside the range of [`Decimal`].
pub const MAX_GROSS_SALARY: Decimal = dec!(1000000000000000);

/// A validated worker name and gross monthly salary.
///
/// Can only be obtained through [`SalaryInput::new`], so holding one means
/// the name is non-blank and the salary is positive and at most
/// [`MAX_GROSS_SALARY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryInput {
    name: String,
    gross_salary: Decimal,
}

impl SalaryInput {
    /// Validates the raw form values.
    ///
    /// `gross_salary` is `None` when the field was empty or could not be
    /// parsed. The name is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns the first failing check according to `order`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_core::{SalaryInput, ValidationError, ValidationOrder};
    /// use rust_decimal_macros::dec;
    ///
    /// let input = SalaryInput::new(" Ana ", Some(dec!(1200)), ValidationOrder::NameFirst).unwrap();
    /// assert_eq!(input.name(), "Ana");
    ///
    /// let err = SalaryInput::new("", None, ValidationOrder::SalaryFirst).unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidSalary);
    /// ```
    pub fn new(
        name: &str,
        gross_salary: Option<Decimal>,
        order: ValidationOrder,
    ) -> Result<Self, ValidationError> {
        let gross_salary = match order {
            ValidationOrder::NameFirst => {
                check_name(name)?;
                check_salary(gross_salary)?
            }
            ValidationOrder::SalaryFirst => {
                let salary = check_salary(gross_salary)?;
                check_name(name)?;
                salary
            }
        };

        Ok(Self {
            name: name.trim().to_string(),
            gross_salary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gross_salary(&self) -> Decimal {
        self.gross_salary
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::InvalidName)
    } else {
        Ok(())
    }
}

fn check_salary(gross_salary: Option<Decimal>) -> Result<Decimal, ValidationError> {
    match gross_salary {
        Some(salary) if salary > Decimal::ZERO && salary <= MAX_GROSS_SALARY => Ok(salary),
        _ => Err(ValidationError::InvalidSalary),
    }
}
