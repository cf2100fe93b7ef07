//! Projection command - year by year super balance table

use super::{format_amount, ScenarioArgs};
use crate::core::YearRecord;
use clap::Args;
use std::borrow::Cow;
use std::io::{self, Write};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ProjectionCommand {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl ProjectionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let snapshot = self.scenario.load()?.evaluate();
        if self.csv {
            write_projection_csv(&snapshot.projection, io::stdout())
        } else {
            println!("{}", projection_table(&snapshot.projection));
            Ok(())
        }
    }
}

/// Row for the projection table and CSV export.
///
/// Column names are part of the export format.
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct ProjectionRow {
    pub year: String,
    pub start_balance: String,
    pub net_cc_in: String,
    pub gross_earnings: String,
    pub earnings_tax: String,
    pub fees: String,
    pub end_balance: String,
}

impl From<&YearRecord> for ProjectionRow {
    fn from(record: &YearRecord) -> Self {
        ProjectionRow {
            year: record.year.to_string(),
            start_balance: format_amount(record.start_balance),
            net_cc_in: format_amount(record.net_contribution_in),
            gross_earnings: format_amount(record.gross_earnings),
            earnings_tax: format_amount(record.earnings_tax),
            fees: format_amount(record.fees),
            end_balance: format_amount(record.end_balance),
        }
    }
}

impl ProjectionRow {
    /// Export column names paired with what each column holds.
    pub fn columns() -> Vec<(String, &'static str)> {
        Self::headers()
            .into_iter()
            .map(Cow::into_owned)
            .zip(COLUMN_DESCRIPTIONS)
            .collect()
    }
}

const COLUMN_DESCRIPTIONS: [&str; <ProjectionRow as Tabled>::LENGTH] = [
    "Projection year, starting at 1",
    "Balance at the start of the year",
    "Concessional contributions after 15% contributions tax",
    "Return on the balance after contributions",
    "Accumulation phase tax on earnings",
    "Fees on the balance after contributions",
    "Balance at the end of the year",
];

pub fn projection_table(records: &[YearRecord]) -> String {
    let rows: Vec<ProjectionRow> = records.iter().map(ProjectionRow::from).collect();
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Write the projection as CSV with a header row and unformatted amounts.
pub fn write_projection_csv<W: Write>(records: &[YearRecord], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(ProjectionRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}
