//! Summary command - single-year tax, contributions and cash flow

use super::projection::write_projection_csv;
use super::{format_amount, format_aud, format_pct, ScenarioArgs};
use crate::core::{ScenarioSnapshot, SuperParams};
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Also write the projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    taxable_income: String,
    income_tax: String,
    medicare_levy: String,
    surcharge: String,
    division293_tax: String,
    concessional_contributions: String,
    net_super_inflow: String,
    take_home_cash: String,
    combined_net_effect: String,
    caps: CapData,
    projection_years: usize,
    final_balance: String,
}

#[derive(Debug, Serialize)]
struct CapData {
    employer_contribution: String,
    total_cap: String,
    used: String,
    max_additional_sacrifice: String,
    excess_over_cap: String,
}

#[derive(Tabled)]
struct CapRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let scenario = self.scenario.load()?;
        let snapshot = scenario.evaluate();

        if snapshot.cap_summary.is_over_cap() {
            log::warn!(
                "Concessional contributions exceed the cap by {}",
                format_aud(snapshot.cap_summary.excess_over_cap)
            );
        }

        if self.json {
            self.print_json(&snapshot)?;
        } else {
            print_summary(&snapshot, &scenario.super_params);
        }

        if let Some(path) = &self.csv {
            write_projection_csv(&snapshot.projection, File::create(path)?)?;
            log::info!(
                "Wrote {} projection rows to {}",
                snapshot.projection.len(),
                path.display()
            );
            if !self.json {
                println!("Projection CSV written to: {}", path.display());
            }
        }
        Ok(())
    }

    fn print_json(&self, snapshot: &ScenarioSnapshot) -> anyhow::Result<()> {
        let cap = &snapshot.cap_summary;
        let data = SummaryData {
            taxable_income: format_amount(snapshot.taxable_income),
            income_tax: format_amount(snapshot.income_tax),
            medicare_levy: format_amount(snapshot.medicare_levy),
            surcharge: format_amount(snapshot.surcharge),
            division293_tax: format_amount(snapshot.division293_tax),
            concessional_contributions: format_amount(snapshot.concessional_contributions),
            net_super_inflow: format_amount(snapshot.net_super_inflow),
            take_home_cash: format_amount(snapshot.take_home_cash),
            combined_net_effect: format_amount(snapshot.combined_net_effect),
            caps: CapData {
                employer_contribution: format_amount(cap.employer_contribution),
                total_cap: format_amount(cap.total_cap),
                used: format_amount(cap.used),
                max_additional_sacrifice: format_amount(cap.max_additional_sacrifice),
                excess_over_cap: format_amount(cap.excess_over_cap),
            },
            projection_years: snapshot.projection.len(),
            final_balance: format_amount(snapshot.final_balance()),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn print_summary(snapshot: &ScenarioSnapshot, params: &SuperParams) {
    println!();
    println!("SUMMARY");
    println!("  Taxable income:            {}", format_aud(snapshot.taxable_income));
    println!("  Income tax:                {}", format_aud(snapshot.income_tax));
    println!("  Medicare levy:             {}", format_aud(snapshot.medicare_levy));
    println!("  MLS:                       {}", format_aud(snapshot.surcharge));
    println!("  Div 293 extra tax:         {}", format_aud(snapshot.division293_tax));
    println!("  Concessional contrib (CC): {}", format_aud(snapshot.concessional_contributions));
    println!("  Super net in (after 15%):  {}", format_aud(snapshot.net_super_inflow));
    println!("  Take-home cash:            {}", format_aud(snapshot.take_home_cash));
    println!("  Combined net effect:       {}", format_aud(snapshot.combined_net_effect));
    println!();

    println!("CAPS");
    println!("{}", Table::new(cap_rows(snapshot, params)).with(Style::rounded()));
    if snapshot.cap_summary.is_over_cap() {
        println!(
            "  WARNING: Over cap by {}",
            format_aud(snapshot.cap_summary.excess_over_cap)
        );
    }
    println!();

    println!(
        "PROJECTION: {} after {} year(s)",
        format_aud(snapshot.final_balance()),
        snapshot.projection.len()
    );
    println!();
}

fn cap_rows(snapshot: &ScenarioSnapshot, params: &SuperParams) -> Vec<CapRow> {
    let cap = &snapshot.cap_summary;
    vec![
        CapRow {
            item: format!("SG (at {})", format_pct(params.employer_contribution_rate)),
            amount: format_amount(cap.employer_contribution),
            description: "Employer contributions at SG rate",
        },
        CapRow {
            item: "Total cap".to_string(),
            amount: format_amount(cap.total_cap),
            description: "Annual concessional cap incl. carry-forward",
        },
        CapRow {
            item: "Used".to_string(),
            amount: format_amount(cap.used),
            description: "SG + salary sacrifice + other concessional",
        },
        CapRow {
            item: "Max salary sacrifice".to_string(),
            amount: format_amount(cap.max_additional_sacrifice),
            description: "Remaining headroom for salary sacrifice",
        },
        CapRow {
            item: "Over by".to_string(),
            amount: format_amount(cap.excess_over_cap),
            description: "Excess over cap (if any)",
        },
    ]
}
