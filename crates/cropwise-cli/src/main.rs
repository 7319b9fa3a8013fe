mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop recommendation and loan planning for farm management"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend crops for a farmer profile (JSON file)
    Recommend {
        /// Path to the farmer profile JSON file
        profile: PathBuf,

        /// Custom catalog JSON file(s)
        #[arg(short, long = "catalog", value_name = "FILE")]
        catalog: Vec<PathBuf>,

        /// Predefined catalog(s): standard (default if no --catalog/--preset given)
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Vec<String>,

        /// Also evaluate the advanced criteria (moisture, NPK, irrigation, ...)
        #[arg(long)]
        advanced: bool,

        /// Maximum number of crops to recommend
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the per-criterion score breakdown
        #[arg(long)]
        verbose: bool,
    },
    /// Compute a loan EMI and amortization schedule
    Loan {
        /// Loan amount in currency units
        #[arg(long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Loan term in months
        #[arg(long)]
        term: u32,

        /// Print the month-by-month schedule
        #[arg(long)]
        schedule: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect crop catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List predefined catalogs
    List,
    /// Show a catalog's crops and their envelopes
    Explain {
        /// Preset name (e.g., "standard")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Recommend {
            profile,
            catalog,
            preset,
            advanced,
            top,
            output,
            verbose,
        } => commands::recommend::run(profile, catalog, preset, advanced, top, &output, verbose),
        Commands::Loan {
            principal,
            rate,
            term,
            schedule,
            output,
        } => commands::loan::run(principal, rate, term, schedule, &output),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { preset } => commands::catalog::explain(&preset),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
