mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datajson")]
#[command(version, about = "Data catalog validator CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a data catalog file
    Validate {
        /// Path to the catalog file (JSON array of dataset records)
        catalog: PathBuf,

        /// CSV table of valid OMB agency and bureau codes
        /// (defaults to $DATAJSON_BUREAU_CODES)
        #[arg(short, long)]
        bureau_codes: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Refuse catalogs with more entries than this
        #[arg(long)]
        max_records: Option<usize>,
    },

    /// Load a bureau code table and report its size
    Codes {
        /// CSV table of OMB agency and bureau codes
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            catalog,
            bureau_codes,
            format,
            max_records,
        } => commands::validate::execute(&catalog, bureau_codes, &format, max_records),

        Commands::Codes { path } => commands::codes::execute(&path),
    }
}
