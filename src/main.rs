mod commands;
mod event_args;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calexport_core::Vendor;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use event_args::EventArgs;

#[derive(Parser)]
#[command(name = "calexport")]
#[command(about = "Build add-to-calendar links (Google, Outlook, webcal) and .ics files for an event")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ~/.config/calexport/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the add-to-calendar link for every vendor
    Links {
        #[command(flatten)]
        event: EventArgs,

        /// Print a JSON object keyed by vendor instead
        #[arg(long)]
        json: bool,
    },
    /// Print the link for one vendor
    Url {
        /// google, ical, outlook-office or outlook-live
        vendor: Vendor,

        #[command(flatten)]
        event: EventArgs,
    },
    /// Open the link for one vendor in the browser
    Open {
        /// google, ical, outlook-office or outlook-live
        vendor: Vendor,

        #[command(flatten)]
        event: EventArgs,
    },
    /// Export the event as an .ics document
    Ics {
        #[command(flatten)]
        event: EventArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a data: URI instead of the raw document
        #[arg(long, conflicts_with = "output")]
        data_uri: bool,
    },
    /// Show the config path and effective settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Links { event, json } => commands::links::run(config_path, event, json),
        Commands::Url { vendor, event } => commands::url::run(config_path, vendor, event),
        Commands::Open { vendor, event } => commands::open::run(config_path, vendor, event),
        Commands::Ics {
            event,
            output,
            data_uri,
        } => commands::ics::run(config_path, event, output, data_uri),
        Commands::Config { init } => commands::config::run(config_path, init),
    }
}

/// Logs go to stderr so links on stdout can be piped.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
