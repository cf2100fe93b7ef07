pub mod optimise;
pub mod projection;
pub mod schema;
pub mod summary;

use crate::core::{
    evaluate, read_scenario_json, ScenarioInput, ScenarioSnapshot, SuperParams, SurchargeParams,
    TaxSchedule,
};
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Scenario taken either from a JSON file or from individual flags
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// JSON scenario file (see `schema json-schema`); takes precedence over the flags below
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Annual salary (AUD)
    #[arg(long, required_unless_present = "file")]
    salary: Option<Decimal>,

    /// Annual negative gearing deduction (AUD)
    #[arg(long, default_value = "0")]
    negative_gearing: Decimal,

    /// Annual salary sacrifice (AUD)
    #[arg(long, default_value = "0")]
    salary_sacrifice: Decimal,

    /// Other concessional contributions (AUD)
    #[arg(long, default_value = "0")]
    other_cc: Decimal,

    /// Employer SG rate
    #[arg(long, default_value = "0.12")]
    sg_rate: Decimal,

    /// Concessional cap (AUD)
    #[arg(long, default_value = "30000")]
    cap: Decimal,

    /// Carry-forward concessional cap available (AUD)
    #[arg(long, default_value = "0")]
    carry_forward: Decimal,

    /// Combined income threshold for Division 293 tax (AUD)
    #[arg(long, default_value = "250000")]
    div293_threshold: Decimal,

    /// Tax rate on fund earnings
    #[arg(long, default_value = "0.15")]
    earnings_tax_rate: Decimal,

    /// Has private hospital cover (suppresses MLS)
    #[arg(long)]
    private_insured: bool,

    /// Enable the simplified Medicare levy surcharge
    #[arg(long)]
    mls_enabled: bool,

    /// MLS income threshold (AUD)
    #[arg(long, default_value = "0")]
    mls_threshold: Decimal,

    /// MLS rate
    #[arg(long, default_value = "0")]
    mls_rate: Decimal,

    /// Starting super balance (AUD)
    #[arg(long, default_value = "0")]
    start_balance: Decimal,

    /// Projection years
    #[arg(short, long, default_value_t = 10)]
    years: u32,

    /// Annual gross return
    #[arg(long = "return", default_value = "0.06")]
    annual_return: Decimal,

    /// Annual fee rate on balance
    #[arg(long, default_value = "0")]
    fees_rate: Decimal,
}

/// Everything needed for one engine run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub input: ScenarioInput,
    pub schedule: TaxSchedule,
    pub super_params: SuperParams,
    pub surcharge: SurchargeParams,
}

impl Scenario {
    pub fn evaluate(&self) -> ScenarioSnapshot {
        evaluate(&self.input, &self.schedule, &self.super_params, &self.surcharge)
    }
}

impl ScenarioArgs {
    pub fn load(&self) -> anyhow::Result<Scenario> {
        match &self.file {
            Some(path) => {
                let file = File::open(path)?;
                let scenario_file = read_scenario_json(BufReader::new(file))?;
                log::info!("Loaded scenario from {}", path.display());
                Ok(Scenario {
                    schedule: scenario_file.schedule()?,
                    input: scenario_file.scenario,
                    super_params: scenario_file.super_params,
                    surcharge: scenario_file.surcharge,
                })
            }
            None => Ok(self.from_flags()),
        }
    }

    fn from_flags(&self) -> Scenario {
        Scenario {
            input: ScenarioInput {
                salary: self.salary.unwrap_or(Decimal::ZERO),
                negative_gearing_deduction: self.negative_gearing,
                salary_sacrifice: self.salary_sacrifice,
                other_concessional_contributions: self.other_cc,
                starting_super_balance: self.start_balance,
                projection_years: self.years,
                privately_insured: self.private_insured,
            },
            schedule: TaxSchedule::default(),
            super_params: SuperParams {
                concessional_cap: self.cap,
                carry_forward: self.carry_forward,
                employer_contribution_rate: self.sg_rate,
                division293_threshold: self.div293_threshold,
                earnings_tax_rate: self.earnings_tax_rate,
                fee_rate: self.fees_rate,
                expected_annual_return: self.annual_return,
            },
            surcharge: SurchargeParams {
                enabled: self.mls_enabled,
                threshold: self.mls_threshold,
                rate: self.mls_rate,
                privately_insured: self.private_insured,
            },
        }
    }
}

/// Amount rounded to cents, without symbol or grouping.
fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

fn format_aud(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-AUD {}", format_amount(amount.abs()))
    } else {
        format!("AUD {}", format_amount(amount))
    }
}

fn format_pct(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
