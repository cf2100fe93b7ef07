use clap::{Parser, Subcommand};
use supersim::cmd::{
    optimise::OptimiseCommand, projection::ProjectionCommand, schema::SchemaCommand,
    summary::SummaryCommand,
};

/// Super balance and tax simulator (AU)
#[derive(Parser, Debug)]
#[command(name = "supersim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single-year tax, contributions and take-home summary
    Summary(SummaryCommand),
    /// Year by year super balance projection
    Projection(ProjectionCommand),
    /// Compare current salary sacrifice with filling the concessional cap
    Optimise(OptimiseCommand),
    /// Print the scenario file schema or projection CSV columns
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Summary(summary) => summary.exec(),
        Command::Projection(projection) => projection.exec(),
        Command::Optimise(optimise) => optimise.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
