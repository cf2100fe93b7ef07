//! Schema command - describe the scenario file and the projection export

use super::projection::ProjectionRow;
use crate::core::ScenarioFile;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// What to describe
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the `--file` scenario input
    JsonSchema,
    /// Header row of `projection --csv`
    CsvHeader,
    /// One line per `projection --csv` column
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let text = match self.format {
            SchemaFormat::JsonSchema => scenario_json_schema()?,
            SchemaFormat::CsvHeader => projection_csv_header(),
            SchemaFormat::CsvFields => projection_csv_fields(),
        };
        println!("{text}");
        Ok(())
    }
}

fn scenario_json_schema() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&schema_for!(ScenarioFile))
}

fn projection_csv_header() -> String {
    let names: Vec<_> = ProjectionRow::columns().into_iter().map(|(name, _)| name).collect();
    names.join(",")
}

fn projection_csv_fields() -> String {
    let mut lines: Vec<_> = ProjectionRow::columns()
        .into_iter()
        .map(|(name, description)| format!("{name:16} {description}"))
        .collect();
    lines.push(String::new());
    lines.push("Amounts are AUD rounded to cents, without grouping".to_string());
    lines.join("\n")
}
