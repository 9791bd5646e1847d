//! Salary deduction calculator.
//!
//! Combines the social-security contribution (INSS) and the configured income
//! tax (IR) policy into a [`SalaryResult`]:
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | INSS = gross × social-security rate |
//! | 2 | IR = policy applied to gross (and INSS, for the progressive policy) |
//! | 3 | Total deduction = INSS + IR |
//! | 4 | Net salary = gross − total deduction |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::SalaryCalculator;
//!
//! let calculator = SalaryCalculator::default();
//! let result = calculator.compute("Ana Pérez", Some(dec!(50000))).unwrap();
//!
//! assert_eq!(result.social_security(), dec!(3500.00));
//! assert_eq!(result.income_tax(), dec!(8325.00));
//! assert_eq!(result.total_deduction(), dec!(11825.00));
//! assert_eq!(result.net_salary(), dec!(38175.00));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::parse_amount;
use crate::calculations::{PayrollConfig, PayrollConfigError};
use crate::{SalaryInput, SalaryResult, ValidationError};

/// Calculator for payroll deductions.
///
/// Holds a validated [`PayrollConfig`]; every computation is pure and the
/// calculator can be reused for any number of requests.
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    config: PayrollConfig,
}

impl SalaryCalculator {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollConfigError`] if the configuration is invalid.
    pub fn new(config: PayrollConfig) -> Result<Self, PayrollConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Validates the form values and computes the deduction breakdown.
    ///
    /// `gross_salary` is `None` when the salary field was left empty or
    /// could not be read as a number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] for a blank name and
    /// [`ValidationError::InvalidSalary`] for a missing, non-positive or
    /// out-of-range salary. When both are invalid the configured
    /// [`ValidationOrder`](crate::ValidationOrder) decides which is reported.
    pub fn compute(
        &self,
        name: &str,
        gross_salary: Option<Decimal>,
    ) -> Result<SalaryResult, ValidationError> {
        let input = SalaryInput::new(name, gross_salary, self.config.validation_order)
            .inspect_err(|error| warn!(%error, "salary form rejected"))?;
        Ok(self.compute_input(&input))
    }

    /// Like [`compute`](Self::compute), but reads the salary from free text.
    ///
    /// Non-numeric text is reported as [`ValidationError::InvalidSalary`].
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_core::{SalaryCalculator, ValidationError};
    ///
    /// let calculator = SalaryCalculator::default();
    ///
    /// assert!(calculator.compute_from_text("Ana", "12,500.00").is_ok());
    /// assert_eq!(
    ///     calculator.compute_from_text("Ana", "twelve"),
    ///     Err(ValidationError::InvalidSalary)
    /// );
    /// ```
    pub fn compute_from_text(
        &self,
        name: &str,
        salary_text: &str,
    ) -> Result<SalaryResult, ValidationError> {
        self.compute(name, parse_amount(salary_text))
    }

    /// Computes the breakdown for an already validated input.
    pub fn compute_input(
        &self,
        input: &SalaryInput,
    ) -> SalaryResult {
        let gross_salary = input.gross_salary();
        let social_security = self.social_security(gross_salary);
        let income_tax = self
            .config
            .income_tax
            .monthly_tax(gross_salary, social_security);

        let result = SalaryResult::from_deductions(gross_salary, social_security, income_tax);
        debug!(
            worker = input.name(),
            gross = %gross_salary,
            social_security = %result.social_security(),
            income_tax = %result.income_tax(),
            net = %result.net_salary(),
            "computed salary deductions"
        );
        result
    }

    /// Social-security contribution (INSS) for a gross monthly salary.
    pub fn social_security(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        gross_salary * self.config.social_security_rate
    }
}

/// Computes deductions with the default configuration.
///
/// Shorthand for `SalaryCalculator::default().compute(name, Some(gross_salary))`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::{ValidationError, compute};
///
/// assert_eq!(compute("  ", dec!(1000)), Err(ValidationError::InvalidName));
/// assert_eq!(compute("Ana", dec!(0)), Err(ValidationError::InvalidSalary));
/// ```
pub fn compute(
    name: &str,
    gross_salary: Decimal,
) -> Result<SalaryResult, ValidationError> {
    SalaryCalculator::default().compute(name, Some(gross_salary))
}
