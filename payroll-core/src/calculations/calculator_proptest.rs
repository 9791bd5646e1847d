//! Property-based tests for the salary calculator.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::calculations::{IncomeTaxPolicy, PayrollConfig, SalaryCalculator};
    use crate::{MAX_GROSS_SALARY, ValidationError};

    // Positive amounts in cents, up to 10 million.
    prop_compose! {
        fn positive_salary()(cents in 1i64..=1_000_000_000i64) -> Decimal {
            Decimal::new(cents, 2)
        }
    }

    prop_compose! {
        fn non_positive_salary()(cents in -1_000_000_000i64..=0i64) -> Decimal {
            Decimal::new(cents, 2)
        }
    }

    // Any non-negative Decimal, from tiny fractions up to Decimal::MAX.
    prop_compose! {
        fn any_magnitude()(
            lo in any::<u32>(),
            mid in any::<u32>(),
            hi in any::<u32>(),
            scale in 0u32..=28,
        ) -> Decimal {
            Decimal::from_parts(lo, mid, hi, false, scale)
        }
    }

    fn any_policy() -> impl Strategy<Value = IncomeTaxPolicy> {
        prop_oneof![
            Just(IncomeTaxPolicy::default_flat()),
            Just(IncomeTaxPolicy::default_progressive()),
        ]
    }

    fn calculator(policy: IncomeTaxPolicy) -> SalaryCalculator {
        SalaryCalculator::new(PayrollConfig {
            income_tax: policy,
            ..PayrollConfig::default()
        })
        .unwrap()
    }

    proptest! {
        #[test]
        fn social_security_is_seven_percent_of_gross(
            gross in positive_salary(),
            policy in any_policy(),
        ) {
            let result = calculator(policy).compute("Ana", Some(gross)).unwrap();

            prop_assert_eq!(result.social_security(), gross * dec!(0.07));
        }

        #[test]
        fn totals_are_consistent(
            gross in positive_salary(),
            policy in any_policy(),
        ) {
            let result = calculator(policy).compute("Ana", Some(gross)).unwrap();

            prop_assert_eq!(
                result.total_deduction(),
                result.social_security() + result.income_tax()
            );
            prop_assert_eq!(result.net_salary(), gross - result.total_deduction());
        }

        #[test]
        fn deductions_never_exceed_gross(
            gross in positive_salary(),
            policy in any_policy(),
        ) {
            let result = calculator(policy).compute("Ana", Some(gross)).unwrap();

            prop_assert!(result.income_tax() >= Decimal::ZERO);
            prop_assert!(result.net_salary() > Decimal::ZERO);
        }

        #[test]
        fn any_magnitude_is_computed_or_rejected(
            gross in any_magnitude(),
            policy in any_policy(),
        ) {
            let result = calculator(policy).compute("Ana", Some(gross));

            if gross > Decimal::ZERO && gross <= MAX_GROSS_SALARY {
                let result = result.unwrap();
                prop_assert_eq!(
                    result.total_deduction(),
                    result.social_security() + result.income_tax()
                );
                prop_assert_eq!(result.net_salary(), gross - result.total_deduction());
            } else {
                prop_assert_eq!(result, Err(ValidationError::InvalidSalary));
            }
        }

        #[test]
        fn non_positive_salary_is_rejected(
            gross in non_positive_salary(),
            policy in any_policy(),
        ) {
            let result = calculator(policy).compute("Ana", Some(gross));

            prop_assert_eq!(result, Err(ValidationError::InvalidSalary));
        }

        #[test]
        fn non_numeric_salary_is_rejected(text in "[a-zA-Z][a-zA-Z ]*") {
            let result = SalaryCalculator::default().compute_from_text("Ana", &text);

            prop_assert_eq!(result, Err(ValidationError::InvalidSalary));
        }

        #[test]
        fn blank_name_is_rejected(
            name in "[ \t\n]*",
            gross in positive_salary(),
        ) {
            let result = SalaryCalculator::default().compute(&name, Some(gross));

            prop_assert_eq!(result, Err(ValidationError::InvalidName));
        }

        #[test]
        fn flat_policy_exempts_up_to_threshold(cents in 1i64..=3_000_000i64) {
            let gross = Decimal::new(cents, 2);
            let result = calculator(IncomeTaxPolicy::default_flat())
                .compute("Ana", Some(gross))
                .unwrap();

            prop_assert_eq!(result.income_tax(), Decimal::ZERO);
        }

        #[test]
        fn progressive_tax_is_monotonic(
            a in positive_salary(),
            b in positive_salary(),
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let policy = IncomeTaxPolicy::default_progressive();

            prop_assert!(policy.annual_bracket_tax(low) <= policy.annual_bracket_tax(high));
        }
    }
}
