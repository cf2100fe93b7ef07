use super::params::SuperParams;
use rust_decimal::Decimal;

/// Concessional contributions measured against the cap.
///
/// Advisory only: nothing here limits what the scenario contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapSummary {
    /// Employer contributions at the guarantee rate
    pub employer_contribution: Decimal,
    /// Concessional cap plus carry-forward
    pub total_cap: Decimal,
    /// Employer + other concessional + salary sacrifice
    pub used: Decimal,
    /// Headroom left for salary sacrifice before counting the current sacrifice
    pub max_additional_sacrifice: Decimal,
    /// Amount by which `used` exceeds `total_cap`
    pub excess_over_cap: Decimal,
}

impl CapSummary {
    pub fn is_over_cap(&self) -> bool {
        self.excess_over_cap > Decimal::ZERO
    }
}

pub fn cap_summary(
    salary: Decimal,
    salary_sacrifice: Decimal,
    other_concessional: Decimal,
    params: &SuperParams,
) -> CapSummary {
    let employer_contribution = params.employer_contribution(salary);
    let total_cap = params.total_cap();
    let committed = employer_contribution + other_concessional;
    let used = committed + salary_sacrifice;

    CapSummary {
        employer_contribution,
        total_cap,
        used,
        max_additional_sacrifice: (total_cap - committed).max(Decimal::ZERO),
        excess_over_cap: (used - total_cap).max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};
    use rust_decimal_macros::dec;

    #[test]
    fn headroom_excludes_current_sacrifice() {
        let summary = cap_summary(dec!(100000), dec!(8400), dec!(0), &SuperParams::default());
        assert_eq!(summary.employer_contribution, dec!(12000));
        assert_eq!(summary.total_cap, dec!(30000));
        assert_eq!(summary.used, dec!(20400));
        assert_eq!(summary.max_additional_sacrifice, dec!(18000));
        assert_eq!(summary.excess_over_cap, dec!(0));
        assert!(!summary.is_over_cap());
    }

    #[test]
    fn carry_forward_extends_cap() {
        let params = SuperParams {
            carry_forward: dec!(15000),
            ..SuperParams::default()
        };
        let summary = cap_summary(dec!(100000), dec!(30000), dec!(0), &params);
        assert_eq!(summary.total_cap, dec!(45000));
        assert_eq!(summary.excess_over_cap, dec!(0));
    }

    #[test]
    fn reports_excess_without_limiting() {
        let summary = cap_summary(dec!(200000), dec!(10000), dec!(2000), &SuperParams::default());
        assert_eq!(summary.employer_contribution, dec!(24000));
        assert_eq!(summary.used, dec!(36000));
        assert_eq!(summary.max_additional_sacrifice, dec!(4000));
        assert_eq!(summary.excess_over_cap, dec!(6000));
        assert!(summary.is_over_cap());
    }

    #[test]
    fn headroom_floors_at_zero() {
        let summary = cap_summary(dec!(300000), dec!(0), dec!(0), &SuperParams::default());
        assert_eq!(summary.max_additional_sacrifice, dec!(0));
        assert_eq!(summary.excess_over_cap, dec!(6000));
    }

    proptest! {
        #[test]
        fn prop_excess_is_used_over_cap(
            salary in 0i64..500_000,
            sacrifice in 0i64..60_000,
            other in 0i64..30_000,
        ) {
            let summary = cap_summary(
                Decimal::from(salary),
                Decimal::from(sacrifice),
                Decimal::from(other),
                &SuperParams::default(),
            );
            prop_assert_eq!(
                summary.excess_over_cap,
                (summary.used - summary.total_cap).max(Decimal::ZERO)
            );
        }
    }
}
