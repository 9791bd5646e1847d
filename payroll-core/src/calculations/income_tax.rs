//! Income tax (IR) policies.
//!
//! Two mutually exclusive ways of computing the monthly income tax are
//! supported:
//!
//! | Policy | Monthly IR |
//! |--------|------------|
//! | Flat threshold | `gross × rate` when `gross > threshold`, else 0 |
//! | Progressive annual | `bracket_tax((gross − INSS) × 12) / 12` |
//!
//! # Default progressive schedule
//!
//! | Annual net income | Tax |
//! |-------------------|-----|
//! | ≤ 100,000 | 0 |
//! | ≤ 200,000 | (income − 100,000) × 15% |
//! | ≤ 350,000 | 15,000 + (income − 200,000) × 20% |
//! | ≤ 500,000 | 45,000 + (income − 350,000) × 25% |
//! | > 500,000 | 82,500 + (income − 500,000) × 30% |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::IncomeTaxPolicy;
//!
//! let policy = IncomeTaxPolicy::default_progressive();
//!
//! // 50,000 gross, 3,500 INSS: 46,500 × 12 = 558,000 annual net income
//! assert_eq!(policy.monthly_tax(dec!(50000), dec!(3500)), dec!(8325));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::TaxBracket;
use crate::calculations::common::max;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// How the monthly income tax is derived from the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IncomeTaxPolicy {
    /// A single rate applied to the whole gross salary once it exceeds
    /// `threshold`.
    FlatThreshold { threshold: Decimal, rate: Decimal },

    /// Brackets applied to the annualized salary net of social security.
    ///
    /// Brackets must be sorted by `min_income`, start at zero and end with an
    /// open-ended bracket; see [`PayrollConfig::validate`](crate::PayrollConfig::validate).
    ProgressiveAnnual { brackets: Vec<TaxBracket> },
}

impl Default for IncomeTaxPolicy {
    fn default() -> Self {
        Self::default_progressive()
    }
}

impl IncomeTaxPolicy {
    /// 15% of the gross salary above 30,000, nothing at or below it.
    pub fn default_flat() -> Self {
        Self::FlatThreshold {
            threshold: dec!(30000),
            rate: dec!(0.15),
        }
    }

    /// The five-bracket annual schedule documented at module level.
    pub fn default_progressive() -> Self {
        Self::ProgressiveAnnual {
            brackets: vec![
                TaxBracket {
                    min_income: dec!(0),
                    max_income: Some(dec!(100000)),
                    tax_rate: dec!(0),
                    base_tax: dec!(0),
                },
                TaxBracket {
                    min_income: dec!(100000),
                    max_income: Some(dec!(200000)),
                    tax_rate: dec!(0.15),
                    base_tax: dec!(0),
                },
                TaxBracket {
                    min_income: dec!(200000),
                    max_income: Some(dec!(350000)),
                    tax_rate: dec!(0.20),
                    base_tax: dec!(15000),
                },
                TaxBracket {
                    min_income: dec!(350000),
                    max_income: Some(dec!(500000)),
                    tax_rate: dec!(0.25),
                    base_tax: dec!(45000),
                },
                TaxBracket {
                    min_income: dec!(500000),
                    max_income: None,
                    tax_rate: dec!(0.30),
                    base_tax: dec!(82500),
                },
            ],
        }
    }

    /// Monthly income tax for a gross salary whose social-security
    /// contribution has already been computed.
    pub fn monthly_tax(
        &self,
        gross_salary: Decimal,
        social_security: Decimal,
    ) -> Decimal {
        match self {
            Self::FlatThreshold { threshold, rate } => {
                if gross_salary > *threshold {
                    gross_salary * rate
                } else {
                    Decimal::ZERO
                }
            }
            Self::ProgressiveAnnual { .. } => {
                let net_monthly = gross_salary - social_security;
                let net_annual = max(net_monthly * MONTHS_PER_YEAR, Decimal::ZERO);
                self.annual_bracket_tax(net_annual) / MONTHS_PER_YEAR
            }
        }
    }

    /// Annual tax owed on `net_annual` under the progressive schedule.
    ///
    /// Returns zero for the flat policy and for non-positive income.
    pub fn annual_bracket_tax(
        &self,
        net_annual: Decimal,
    ) -> Decimal {
        let Self::ProgressiveAnnual { brackets } = self else {
            return Decimal::ZERO;
        };
        if net_annual <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        brackets
            .iter()
            .find(|b| b.contains(net_annual))
            .map_or(Decimal::ZERO, |b| b.tax_for(net_annual))
    }
}
