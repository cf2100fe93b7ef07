use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Simplified single-threshold Medicare levy surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SurchargeParams {
    /// Apply the surcharge at all
    pub enabled: bool,
    /// Income above which the surcharge applies (AUD)
    #[schemars(with = "f64")]
    pub threshold: Decimal,
    /// Rate charged on income above the threshold
    #[schemars(with = "f64")]
    pub rate: Decimal,
    /// Private hospital cover held; suppresses the surcharge
    pub privately_insured: bool,
}

impl Default for SurchargeParams {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: Decimal::ZERO,
            rate: Decimal::ZERO,
            privately_insured: true,
        }
    }
}

/// Surcharge payable on top of the Medicare levy.
pub fn surcharge(taxable_income: Decimal, params: &SurchargeParams) -> Decimal {
    if !params.enabled || params.privately_insured {
        return Decimal::ZERO;
    }
    if taxable_income <= params.threshold {
        return Decimal::ZERO;
    }
    (taxable_income - params.threshold) * params.rate
}
