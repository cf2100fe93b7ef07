use super::params::SuperParams;
use super::scenario::{evaluate, ScenarioInput, ScenarioSnapshot};
use super::schedule::TaxSchedule;
use super::surcharge::SurchargeParams;
use rust_decimal::Decimal;

/// A scenario side by side with the same scenario at full salary sacrifice
#[derive(Debug, Clone)]
pub struct SacrificeComparison {
    pub current: ScenarioSnapshot,
    pub optimised: ScenarioSnapshot,
    /// Salary sacrifice used by the optimised scenario (AUD)
    pub optimised_sacrifice: Decimal,
    /// Sacrifice added on top of the current amount (AUD)
    pub additional_sacrifice: Decimal,
}

impl SacrificeComparison {
    pub fn current_sacrifice(&self) -> Decimal {
        self.optimised_sacrifice - self.additional_sacrifice
    }

    pub fn take_home_change(&self) -> Decimal {
        self.optimised.take_home_cash - self.current.take_home_cash
    }

    pub fn super_inflow_change(&self) -> Decimal {
        self.optimised.net_super_inflow - self.current.net_super_inflow
    }

    pub fn combined_change(&self) -> Decimal {
        self.optimised.combined_net_effect - self.current.combined_net_effect
    }

    pub fn final_balance_change(&self) -> Decimal {
        self.optimised.final_balance() - self.current.final_balance()
    }
}

/// Re-run a scenario with salary sacrifice raised to fill the concessional cap.
///
/// A scenario already at or over the cap is compared against itself.
pub fn optimise_salary_sacrifice(
    input: &ScenarioInput,
    schedule: &TaxSchedule,
    super_params: &SuperParams,
    surcharge_params: &SurchargeParams,
) -> SacrificeComparison {
    let current = evaluate(input, schedule, super_params, surcharge_params);
    let headroom = current.cap_summary.max_additional_sacrifice;
    let optimised_sacrifice = headroom.max(input.salary_sacrifice);
    let additional_sacrifice = optimised_sacrifice - input.salary_sacrifice;

    log::debug!(
        "Sacrifice headroom {:.2}, current {:.2}, adding {:.2}",
        headroom,
        input.salary_sacrifice,
        additional_sacrifice
    );

    let optimised = if additional_sacrifice.is_zero() {
        current.clone()
    } else {
        let maxed = ScenarioInput {
            salary_sacrifice: optimised_sacrifice,
            ..*input
        };
        evaluate(&maxed, schedule, super_params, surcharge_params)
    };

    SacrificeComparison {
        current,
        optimised,
        optimised_sacrifice,
        additional_sacrifice,
    }
}
