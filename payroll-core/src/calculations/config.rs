use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{TaxBracket, ValidationOrder};
use crate::calculations::IncomeTaxPolicy;

/// Errors that can occur when validating a [`PayrollConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollConfigError {
    /// The social-security rate must be between 0 and 1.
    #[error("social security rate must be between 0 and 1, got {0}")]
    InvalidSocialSecurityRate(Decimal),

    /// The flat income tax rate must be between 0 and 1.
    #[error("income tax rate must be between 0 and 1, got {0}")]
    InvalidFlatRate(Decimal),

    /// The flat income tax threshold must be non-negative.
    #[error("income tax threshold must be non-negative, got {0}")]
    InvalidThreshold(Decimal),

    /// The progressive schedule has no brackets.
    #[error("progressive schedule has no brackets")]
    EmptySchedule,

    /// The first bracket must start at zero income.
    #[error("progressive schedule must start at 0, starts at {0}")]
    ScheduleStartsAbove(Decimal),

    /// A bracket does not begin where the previous one ended.
    #[error("bracket {index} starts at {found}, expected {expected}")]
    GapInSchedule {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    /// A bracket's upper bound is not above its lower bound.
    #[error("bracket {0} has an upper bound at or below its lower bound")]
    EmptyBracket(usize),

    /// Only the last bracket may omit its upper bound, and it must.
    #[error("only the last bracket may be open-ended (bracket {0})")]
    MisplacedOpenBracket(usize),

    /// A bracket's marginal rate must be between 0 and 1.
    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidBracketRate { index: usize, rate: Decimal },

    /// A bracket's base tax does not match the tax owed at its lower bound.
    #[error("bracket {index} base tax is {found}, expected {expected}")]
    DiscontinuousSchedule {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },
}

fn default_social_security_rate() -> Decimal {
    dec!(0.07)
}

/// Rates and policies used by the [`SalaryCalculator`](crate::SalaryCalculator).
///
/// The default is a 7% social-security contribution, the progressive annual
/// income tax schedule and name-first validation. Every field is optional
/// when deserializing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::{IncomeTaxPolicy, PayrollConfig};
///
/// let config = PayrollConfig {
///     income_tax: IncomeTaxPolicy::default_flat(),
///     ..PayrollConfig::default()
/// };
///
/// assert_eq!(config.social_security_rate, dec!(0.07));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Fraction of the gross salary withheld as social security (INSS).
    #[serde(default = "default_social_security_rate")]
    pub social_security_rate: Decimal,

    /// Income tax (IR) policy.
    #[serde(default)]
    pub income_tax: IncomeTaxPolicy,

    /// Which form field is reported first when both are invalid.
    #[serde(default)]
    pub validation_order: ValidationOrder,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            social_security_rate: default_social_security_rate(),
            income_tax: IncomeTaxPolicy::default(),
            validation_order: ValidationOrder::default(),
        }
    }
}

fn is_rate(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

impl PayrollConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollConfigError`] if:
    /// - `social_security_rate` is not in [0, 1]
    /// - a flat policy has a rate outside [0, 1] or a negative threshold
    /// - a progressive schedule is empty, does not start at 0, has gaps or
    ///   empty brackets, is not open-ended exactly at the end, has a rate
    ///   outside [0, 1], or jumps at a bracket boundary
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payroll_core::{PayrollConfig, PayrollConfigError};
    ///
    /// let config = PayrollConfig {
    ///     social_security_rate: dec!(1.5),
    ///     ..PayrollConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(PayrollConfigError::InvalidSocialSecurityRate(dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), PayrollConfigError> {
        if !is_rate(self.social_security_rate) {
            return Err(PayrollConfigError::InvalidSocialSecurityRate(
                self.social_security_rate,
            ));
        }

        match &self.income_tax {
            IncomeTaxPolicy::FlatThreshold { threshold, rate } => {
                if !is_rate(*rate) {
                    return Err(PayrollConfigError::InvalidFlatRate(*rate));
                }
                if *threshold < Decimal::ZERO {
                    return Err(PayrollConfigError::InvalidThreshold(*threshold));
                }
                Ok(())
            }
            IncomeTaxPolicy::ProgressiveAnnual { brackets } => validate_schedule(brackets),
        }
    }
}

fn validate_schedule(brackets: &[TaxBracket]) -> Result<(), PayrollConfigError> {
    let first = brackets.first().ok_or(PayrollConfigError::EmptySchedule)?;
    if first.min_income != Decimal::ZERO {
        return Err(PayrollConfigError::ScheduleStartsAbove(first.min_income));
    }
    if first.base_tax != Decimal::ZERO {
        return Err(PayrollConfigError::DiscontinuousSchedule {
            index: 0,
            expected: Decimal::ZERO,
            found: first.base_tax,
        });
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if !is_rate(bracket.tax_rate) {
            return Err(PayrollConfigError::InvalidBracketRate {
                index,
                rate: bracket.tax_rate,
            });
        }

        match bracket.max_income {
            Some(_) if index == last_index => {
                return Err(PayrollConfigError::MisplacedOpenBracket(index));
            }
            Some(max) if max <= bracket.min_income => {
                return Err(PayrollConfigError::EmptyBracket(index));
            }
            None if index != last_index => {
                return Err(PayrollConfigError::MisplacedOpenBracket(index));
            }
            _ => {}
        }

        if index == 0 {
            continue;
        }
        let previous = &brackets[index - 1];
        // Checked above: every bracket before the last has an upper bound.
        let expected_start = previous.max_income.unwrap_or(previous.min_income);
        if bracket.min_income != expected_start {
            return Err(PayrollConfigError::GapInSchedule {
                index,
                expected: expected_start,
                found: bracket.min_income,
            });
        }
        let expected_base = previous.tax_for(expected_start);
        if bracket.base_tax != expected_base {
            return Err(PayrollConfigError::DiscontinuousSchedule {
                index,
                expected: expected_base,
                found: bracket.base_tax,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn schedule() -> Vec<TaxBracket> {
        match IncomeTaxPolicy::default_progressive() {
            IncomeTaxPolicy::ProgressiveAnnual { brackets } => brackets,
            IncomeTaxPolicy::FlatThreshold { .. } => unreachable!(),
        }
    }

    fn progressive(brackets: Vec<TaxBracket>) -> PayrollConfig {
        PayrollConfig {
            income_tax: IncomeTaxPolicy::ProgressiveAnnual { brackets },
            ..PayrollConfig::default()
        }
    }

    // =========================================================================
    // defaults
    // =========================================================================

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PayrollConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_flat_config_is_valid() {
        let config = PayrollConfig {
            income_tax: IncomeTaxPolicy::default_flat(),
            ..PayrollConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn default_uses_seven_percent_and_name_first() {
        let config = PayrollConfig::default();

        assert_eq!(config.social_security_rate, dec!(0.07));
        assert_eq!(config.validation_order, ValidationOrder::NameFirst);
    }

    // =========================================================================
    // rate checks
    // =========================================================================

    #[test]
    fn rejects_negative_social_security_rate() {
        let config = PayrollConfig {
            social_security_rate: dec!(-0.01),
            ..PayrollConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(PayrollConfigError::InvalidSocialSecurityRate(dec!(-0.01)))
        );
    }

    #[test]
    fn rejects_flat_rate_above_one() {
        let config = PayrollConfig {
            income_tax: IncomeTaxPolicy::FlatThreshold {
                threshold: dec!(30000),
                rate: dec!(1.01),
            },
            ..PayrollConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(PayrollConfigError::InvalidFlatRate(dec!(1.01)))
        );
    }

    #[test]
    fn rejects_negative_flat_threshold() {
        let config = PayrollConfig {
            income_tax: IncomeTaxPolicy::FlatThreshold {
                threshold: dec!(-1),
                rate: dec!(0.15),
            },
            ..PayrollConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(PayrollConfigError::InvalidThreshold(dec!(-1)))
        );
    }

    // =========================================================================
    // schedule checks
    // =========================================================================

    #[test]
    fn rejects_empty_schedule() {
        let config = progressive(Vec::new());

        assert_eq!(config.validate(), Err(PayrollConfigError::EmptySchedule));
    }

    #[test]
    fn rejects_schedule_not_starting_at_zero() {
        let mut brackets = schedule();
        brackets[0].min_income = dec!(10);

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::ScheduleStartsAbove(dec!(10)))
        );
    }

    #[test]
    fn rejects_gap_between_brackets() {
        let mut brackets = schedule();
        brackets[2].min_income = dec!(210000);

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::GapInSchedule {
                index: 2,
                expected: dec!(200000),
                found: dec!(210000),
            })
        );
    }

    #[test]
    fn rejects_closed_last_bracket() {
        let mut brackets = schedule();
        brackets[4].max_income = Some(dec!(900000));

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::MisplacedOpenBracket(4))
        );
    }

    #[test]
    fn rejects_open_bracket_before_last() {
        let mut brackets = schedule();
        brackets[1].max_income = None;

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::MisplacedOpenBracket(1))
        );
    }

    #[test]
    fn rejects_empty_bracket() {
        let mut brackets = schedule();
        brackets[1].max_income = Some(dec!(100000));

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::EmptyBracket(1))
        );
    }

    #[test]
    fn rejects_bracket_rate_out_of_range() {
        let mut brackets = schedule();
        brackets[3].tax_rate = dec!(2);

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::InvalidBracketRate {
                index: 3,
                rate: dec!(2),
            })
        );
    }

    #[test]
    fn rejects_jump_at_boundary() {
        let mut brackets = schedule();
        brackets[3].base_tax = dec!(46000);

        assert_eq!(
            progressive(brackets).validate(),
            Err(PayrollConfigError::DiscontinuousSchedule {
                index: 3,
                expected: dec!(45000),
                found: dec!(46000),
            })
        );
    }
}
