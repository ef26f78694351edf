//! quandl CLI - Command line client for the Quandl data API.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quandl_lib::AUTH_TOKEN_ENV;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "quandl")]
#[command(about = "Command line client for the Quandl financial data API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API auth token. Without one, calls use the rate-limited anonymous tier.
    #[arg(long, env = AUTH_TOKEN_ENV, global = true, hide_env_values = true)]
    auth_token: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no summaries)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download one column of a dataset
    Data {
        /// Dataset identifier (e.g., BOE/XUDLBK73, WIKI/AAPL)
        identifier: String,

        /// First date to include (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Last date to include (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Column to extract. Defaults to the most likely data column.
        #[arg(short, long)]
        column: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show dataset metadata and columns
    Info {
        /// Dataset identifier
        identifier: String,
    },

    /// Search datasets
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// List the available reference lists
    Sources,

    /// Download a reference list
    List {
        /// List name (see `quandl sources`)
        source: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Download every security list as one catalog
    Securities {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let token = cli.auth_token;
    match command {
        Commands::Data {
            identifier,
            start,
            end,
            column,
            format,
            output,
        } => {
            let client = commands::client(token)?;
            commands::data::fetch_data(
                &client,
                &identifier,
                start.as_deref(),
                end.as_deref(),
                column.as_deref(),
                format,
                output.as_deref(),
            )
        }
        Commands::Info { identifier } => {
            let client = commands::client(token)?;
            commands::info::show_info(&client, &identifier)
        }
        Commands::Search { query } => {
            let client = commands::client(token)?;
            commands::search::search(&client, &query)
        }
        Commands::Sources => commands::list::list_sources(),
        Commands::List {
            source,
            format,
            output,
        } => {
            let client = commands::client(token)?;
            commands::list::download_list(&client, &source, format, output.as_deref(), cli.quiet)
        }
        Commands::Securities { format, output } => {
            let client = commands::client(token)?;
            commands::list::download_securities(&client, format, output.as_deref(), cli.quiet)
        }
    }
}
