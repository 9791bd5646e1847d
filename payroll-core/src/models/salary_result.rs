use rust_decimal::Decimal;
use serde::Serialize;

/// Deduction breakdown for one gross monthly salary.
///
/// The totals are derived on construction, so `total_deduction` is always
/// `social_security + income_tax` and `net_salary` is always
/// `gross_salary - total_deduction`. Values are unrounded; rounding for
/// display is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryResult {
    gross_salary: Decimal,
    social_security: Decimal,
    income_tax: Decimal,
    total_deduction: Decimal,
    net_salary: Decimal,
}

impl SalaryResult {
    pub(crate) fn from_deductions(
        gross_salary: Decimal,
        social_security: Decimal,
        income_tax: Decimal,
    ) -> Self {
        let total_deduction = social_security + income_tax;
        Self {
            gross_salary,
            social_security,
            income_tax,
            total_deduction,
            net_salary: gross_salary - total_deduction,
        }
    }

    pub fn gross_salary(&self) -> Decimal {
        self.gross_salary
    }

    /// Social-security contribution (INSS).
    pub fn social_security(&self) -> Decimal {
        self.social_security
    }

    /// Monthly income tax (IR).
    pub fn income_tax(&self) -> Decimal {
        self.income_tax
    }

    pub fn total_deduction(&self) -> Decimal {
        self.total_deduction
    }

    pub fn net_salary(&self) -> Decimal {
        self.net_salary
    }
}
