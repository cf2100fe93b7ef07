use super::params::SuperParams;
use super::scenario::ScenarioInput;
use super::schedule::{BracketThreshold, ScheduleError, TaxSchedule};
use super::surcharge::SurchargeParams;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Input root for a scenario JSON file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScenarioFile {
    pub scenario: ScenarioInput,
    pub super_params: SuperParams,
    pub surcharge: SurchargeParams,
    /// Custom resident schedule; the 2024/25 rates are used when absent
    pub tax: Option<ScheduleInput>,
}

/// Custom bracket table given as thresholds and marginal rates
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleInput {
    /// Brackets in ascending order, the first starting at 0 with a 0 rate
    pub brackets: Vec<BracketThreshold>,
    #[serde(default = "default_levy_rate")]
    #[schemars(with = "f64")]
    pub medicare_levy_rate: Decimal,
}

fn default_levy_rate() -> Decimal {
    TaxSchedule::default().medicare_levy_rate()
}

impl ScenarioFile {
    pub fn schedule(&self) -> Result<TaxSchedule, ScheduleError> {
        match &self.tax {
            Some(tax) => TaxSchedule::from_thresholds(&tax.brackets, tax.medicare_levy_rate),
            None => Ok(TaxSchedule::default()),
        }
    }
}

pub fn read_scenario_json<R: Read>(reader: R) -> anyhow::Result<ScenarioFile> {
    let file: ScenarioFile = serde_json::from_reader(reader)?;
    Ok(file)
}
