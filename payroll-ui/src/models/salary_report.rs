use std::fmt;

use payroll_core::SalaryResult;

use crate::utils::format_amount;

/// A worker's deduction breakdown, ready for display.
///
/// Every amount is shown with two decimal places; the underlying
/// [`SalaryResult`] keeps full precision.
#[derive(Clone, Debug)]
pub struct SalaryReport<'a> {
    pub worker: &'a str,
    pub result: &'a SalaryResult,
}

impl<'a> SalaryReport<'a> {
    pub fn new(
        worker: &'a str,
        result: &'a SalaryResult,
    ) -> Self {
        Self { worker, result }
    }
}

impl fmt::Display for SalaryReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Worker:          {}", self.worker.trim())?;
        writeln!(
            f,
            "Gross salary:    {}",
            format_amount(self.result.gross_salary())
        )?;
        writeln!(
            f,
            "INSS:            {}",
            format_amount(self.result.social_security())
        )?;
        writeln!(
            f,
            "IR:              {}",
            format_amount(self.result.income_tax())
        )?;
        writeln!(
            f,
            "Total deduction: {}",
            format_amount(self.result.total_deduction())
        )?;
        write!(
            f,
            "Net salary:      {}",
            format_amount(self.result.net_salary())
        )
    }
}

#[cfg(test)]
mod tests {
    use payroll_core::SalaryCalculator;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn display_lists_every_amount_with_two_decimals() {
        let result = SalaryCalculator::default()
            .compute("Ana", Some(dec!(50000)))
            .unwrap();

        let text = SalaryReport::new(" Ana ", &result).to_string();

        assert_eq!(
            text,
            "Worker:          Ana\n\
             Gross salary:    50000.00\n\
             INSS:            3500.00\n\
             IR:              8325.00\n\
             Total deduction: 11825.00\n\
             Net salary:      38175.00"
        );
    }
}
