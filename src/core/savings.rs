use super::error::{Result, ensure_amount, ensure_periods};
use super::types::SavingsPlan;

/// Flat contribution needed per period to reach `target`.
pub fn savings_plan(target: f64, periods: u32) -> Result<f64> {
    Ok(plan_savings(target, periods)?.per_period)
}

pub fn plan_savings(target: f64, periods: u32) -> Result<SavingsPlan> {
    let target = ensure_amount("target", target)?;
    let periods = ensure_periods("periods", periods)?;
    Ok(SavingsPlan {
        target,
        periods,
        per_period: target / periods as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn splits_target_evenly_across_months() {
        let monthly = savings_plan(20_000.0, 6).expect("valid plan");
        assert!((monthly - 3_333.333_333).abs() < 1e-3, "got {monthly}");
    }

    #[test]
    fn single_period_needs_the_whole_target() {
        let plan = plan_savings(12_345.0, 1).expect("valid plan");
        assert_eq!(plan.per_period, 12_345.0);
        assert_eq!(plan.periods, 1);
    }

    #[test]
    fn zero_target_needs_nothing() {
        assert_eq!(savings_plan(0.0, 12).expect("valid plan"), 0.0);
    }

    #[test]
    fn zero_periods_is_rejected() {
        let err = savings_plan(20_000.0, 0).expect_err("division by zero must be rejected");
        assert_eq!(err.field(), "periods");
    }

    #[test]
    fn negative_target_is_rejected() {
        let err = savings_plan(-5.0, 6).expect_err("negative target must be rejected");
        assert_eq!(err.field(), "target");
    }

    proptest! {
        #[test]
        fn prop_per_period_times_periods_recovers_target(
            target in 0u32..10_000_000,
            periods in 1u32..=600
        ) {
            let plan = plan_savings(target as f64, periods).expect("valid plan");
            let recovered = plan.per_period * periods as f64;
            prop_assert!((recovered - target as f64).abs() <= 1e-6 * (target as f64).max(1.0));
            let again = plan_savings(target as f64, periods).expect("valid plan");
            prop_assert_eq!(plan.per_period.to_bits(), again.per_period.to_bits());
        }
    }
}
