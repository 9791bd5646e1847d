use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive income tax schedule.
///
/// A bracket covers incomes strictly above `min_income` up to and including
/// `max_income`. The top bracket of a schedule has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }

    /// Tax owed on `income` when this bracket is the marginal one.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.min_income) * self.tax_rate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket() -> TaxBracket {
        TaxBracket {
            min_income: dec!(200000),
            max_income: Some(dec!(350000)),
            tax_rate: dec!(0.20),
            base_tax: dec!(15000),
        }
    }

    #[test]
    fn contains_excludes_lower_bound() {
        assert!(!bracket().contains(dec!(200000)));
        assert!(bracket().contains(dec!(200000.01)));
    }

    #[test]
    fn contains_includes_upper_bound() {
        assert!(bracket().contains(dec!(350000)));
        assert!(!bracket().contains(dec!(350000.01)));
    }

    #[test]
    fn contains_open_ended_bracket() {
        let top = TaxBracket {
            max_income: None,
            ..bracket()
        };

        assert!(top.contains(dec!(999999999)));
    }

    #[test]
    fn tax_for_adds_marginal_tax_to_base() {
        assert_eq!(bracket().tax_for(dec!(250000)), dec!(25000));
    }
}
