use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tax on concessional contributions as they enter the fund
pub const CONTRIBUTIONS_TAX_RATE: Decimal = dec!(0.15);

/// Superannuation settings for a scenario.
///
/// Rates are ratios (0.12 = 12%) and are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SuperParams {
    /// Annual concessional contributions cap (AUD)
    #[schemars(with = "f64")]
    pub concessional_cap: Decimal,
    /// Unused cap carried forward from prior years (AUD)
    #[schemars(with = "f64")]
    pub carry_forward: Decimal,
    /// Employer superannuation guarantee rate
    #[schemars(with = "f64")]
    pub employer_contribution_rate: Decimal,
    /// Combined income above which Division 293 tax applies (AUD)
    #[schemars(with = "f64")]
    pub division293_threshold: Decimal,
    /// Tax on fund earnings in the accumulation phase
    #[schemars(with = "f64")]
    pub earnings_tax_rate: Decimal,
    /// Annual fees as a ratio of the balance
    #[schemars(with = "f64")]
    pub fee_rate: Decimal,
    /// Gross annual investment return
    #[schemars(with = "f64")]
    pub expected_annual_return: Decimal,
}

impl Default for SuperParams {
    fn default() -> Self {
        Self {
            concessional_cap: dec!(30000),
            carry_forward: dec!(0),
            employer_contribution_rate: dec!(0.12),
            division293_threshold: dec!(250000),
            earnings_tax_rate: dec!(0.15),
            fee_rate: dec!(0),
            expected_annual_return: dec!(0.06),
        }
    }
}

impl SuperParams {
    pub fn employer_contribution(&self, salary: Decimal) -> Decimal {
        salary * self.employer_contribution_rate
    }

    /// Cap available this year including carry-forward.
    pub fn total_cap(&self) -> Decimal {
        self.concessional_cap + self.carry_forward
    }
}
