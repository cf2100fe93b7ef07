//! Optimise command - compare the current salary sacrifice against filling the cap

use super::{format_amount, format_aud, ScenarioArgs};
use crate::core::{optimise_salary_sacrifice, SacrificeComparison};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct OptimiseCommand {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ComparisonData {
    current_sacrifice: String,
    optimised_sacrifice: String,
    additional_sacrifice: String,
    take_home_change: String,
    super_inflow_change: String,
    combined_change: String,
    final_balance_change: String,
}

impl From<&SacrificeComparison> for ComparisonData {
    fn from(comparison: &SacrificeComparison) -> Self {
        ComparisonData {
            current_sacrifice: format_amount(comparison.current_sacrifice()),
            optimised_sacrifice: format_amount(comparison.optimised_sacrifice),
            additional_sacrifice: format_amount(comparison.additional_sacrifice),
            take_home_change: format_amount(comparison.take_home_change()),
            super_inflow_change: format_amount(comparison.super_inflow_change()),
            combined_change: format_amount(comparison.combined_change()),
            final_balance_change: format_amount(comparison.final_balance_change()),
        }
    }
}

impl OptimiseCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let scenario = self.scenario.load()?;
        let comparison = optimise_salary_sacrifice(
            &scenario.input,
            &scenario.schedule,
            &scenario.super_params,
            &scenario.surcharge,
        );

        if self.json {
            let data = ComparisonData::from(&comparison);
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_comparison(&comparison);
        }
        Ok(())
    }
}

fn print_comparison(comparison: &SacrificeComparison) {
    println!();
    if comparison.additional_sacrifice.is_zero() {
        println!("SALARY SACRIFICE: no cap headroom left");
        println!();
        return;
    }
    println!(
        "SALARY SACRIFICE: {} -> {} (+{})",
        format_aud(comparison.current_sacrifice()),
        format_aud(comparison.optimised_sacrifice),
        format_aud(comparison.additional_sacrifice)
    );
    println!("  Take-home cash:      {}", format_aud(comparison.take_home_change()));
    println!("  Super net in:        {}", format_aud(comparison.super_inflow_change()));
    println!("  Combined net effect: {}", format_aud(comparison.combined_change()));
    println!(
        "  Final balance after {} year(s): {}",
        comparison.optimised.projection.len(),
        format_aud(comparison.final_balance_change())
    );
    println!();
}
