use super::caps::{cap_summary, CapSummary};
use super::division293::division293_tax;
use super::params::{SuperParams, CONTRIBUTIONS_TAX_RATE};
use super::projection::{project, YearRecord};
use super::schedule::TaxSchedule;
use super::surcharge::{surcharge, SurchargeParams};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An individual's income and super position for one financial year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScenarioInput {
    /// Annual salary before salary sacrifice (AUD)
    #[schemars(with = "f64")]
    pub salary: Decimal,
    /// Net rental loss deducted from income (AUD)
    #[schemars(with = "f64")]
    pub negative_gearing_deduction: Decimal,
    /// Pre-tax salary directed to super (AUD)
    #[schemars(with = "f64")]
    pub salary_sacrifice: Decimal,
    /// Any other concessional contributions, e.g. personal deductible (AUD)
    #[schemars(with = "f64")]
    pub other_concessional_contributions: Decimal,
    /// Super balance at the start of the projection (AUD)
    #[schemars(with = "f64")]
    pub starting_super_balance: Decimal,
    /// Years to project; 0 still reports one year
    pub projection_years: u32,
    /// Private hospital cover held
    pub privately_insured: bool,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            salary: Decimal::ZERO,
            negative_gearing_deduction: Decimal::ZERO,
            salary_sacrifice: Decimal::ZERO,
            other_concessional_contributions: Decimal::ZERO,
            starting_super_balance: Decimal::ZERO,
            projection_years: 0,
            privately_insured: true,
        }
    }
}

/// Single-year tax and super outcome, plus the balance projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSnapshot {
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub medicare_levy: Decimal,
    pub surcharge: Decimal,
    pub concessional_contributions: Decimal,
    pub division293_tax: Decimal,
    /// Concessional contributions after the 15% contributions tax
    pub net_super_inflow: Decimal,
    pub take_home_cash: Decimal,
    /// Take-home cash plus net super inflow
    pub combined_net_effect: Decimal,
    pub cap_summary: CapSummary,
    pub projection: Vec<YearRecord>,
}

impl ScenarioSnapshot {
    /// Income tax, Medicare levy, surcharge and Division 293 combined.
    pub fn total_personal_tax(&self) -> Decimal {
        self.income_tax + self.medicare_levy + self.surcharge + self.division293_tax
    }

    pub fn final_balance(&self) -> Decimal {
        super::projection::final_balance(&self.projection).unwrap_or(Decimal::ZERO)
    }
}

/// Evaluate a scenario for one year and project the super balance.
///
/// The scenario's `privately_insured` flag takes precedence over the one on
/// `surcharge_params`. No input is validated: out of range figures flow
/// straight through the arithmetic.
pub fn evaluate(
    input: &ScenarioInput,
    schedule: &TaxSchedule,
    super_params: &SuperParams,
    surcharge_params: &SurchargeParams,
) -> ScenarioSnapshot {
    let taxable_income = (input.salary - input.negative_gearing_deduction - input.salary_sacrifice)
        .max(Decimal::ZERO);

    let employer_contribution = super_params.employer_contribution(input.salary);
    let concessional_contributions =
        employer_contribution + input.salary_sacrifice + input.other_concessional_contributions;

    let cap_summary = cap_summary(
        input.salary,
        input.salary_sacrifice,
        input.other_concessional_contributions,
        super_params,
    );

    let income_tax = schedule.income_tax(taxable_income);
    let medicare_levy = schedule.medicare_levy(taxable_income);
    let effective_surcharge = SurchargeParams {
        privately_insured: input.privately_insured,
        ..*surcharge_params
    };
    let surcharge = surcharge(taxable_income, &effective_surcharge);

    let division293_tax =
        division293_tax(taxable_income, concessional_contributions, super_params);

    let net_super_inflow = concessional_contributions * (Decimal::ONE - CONTRIBUTIONS_TAX_RATE);
    let take_home_cash = input.salary
        - input.salary_sacrifice
        - income_tax
        - medicare_levy
        - surcharge
        - division293_tax;
    let combined_net_effect = take_home_cash + net_super_inflow;

    log::debug!(
        "Scenario: taxable {:.2}, tax {:.2}, levy {:.2}, surcharge {:.2}, div293 {:.2}, cc {:.2}",
        taxable_income,
        income_tax,
        medicare_levy,
        surcharge,
        division293_tax,
        concessional_contributions
    );

    let projection = project(
        input.starting_super_balance,
        net_super_inflow,
        super_params,
        input.projection_years,
    );

    ScenarioSnapshot {
        taxable_income,
        income_tax,
        medicare_levy,
        surcharge,
        concessional_contributions,
        division293_tax,
        net_super_inflow,
        take_home_cash,
        combined_net_effect,
        cap_summary,
        projection,
    }
}
