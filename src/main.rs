//! Leasecheck CLI - batch analysis of a DHCP lease log.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use leasecheck::config::Config;
use leasecheck::domain::NetworkCatalog;
use leasecheck::parser::{load_settings, load_syslog};
use leasecheck::reporter::{ConsoleReporter, ReportSink};

#[derive(Parser)]
#[command(name = "leasecheck")]
#[command(about = "Analyze a DHCP lease log for misbehaving clients")]
struct Cli {
    /// Path to the DHCP settings CSV export
    #[arg(short = 's', long)]
    settings: Option<PathBuf>,

    /// Path to the DHCP syslog CSV export (newest rows first)
    #[arg(short = 'l', long)]
    syslog: Option<PathBuf>,

    /// How many clients to list in the client ranking
    #[arg(long, default_value_t = 25)]
    top_clients: usize,

    /// How many networks to list in the network ranking
    #[arg(long, default_value_t = 25)]
    top_networks: usize,

    /// Show per-network lease durations in the report
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = Config::load();
    if let Some(path) = cli.settings {
        config.settings_path = path;
    }
    if let Some(path) = cli.syslog {
        config.syslog_path = path;
    }
    config.top_clients = cli.top_clients;
    config.top_networks = cli.top_networks;

    // A missing or unreadable input never aborts the run: the analysis
    // proceeds with whatever is left and reports what it could compute.
    let catalog = load_settings(&config.settings_path).unwrap_or_else(|e| {
        tracing::error!(path = %config.settings_path.display(), error = %e, "failed to read settings CSV");
        NetworkCatalog::new()
    });

    let events = load_syslog(&config.syslog_path).unwrap_or_else(|e| {
        tracing::error!(path = %config.syslog_path.display(), error = %e, "failed to read syslog CSV");
        Vec::new()
    });

    let report = leasecheck::analyze(&catalog, &events, config.top_clients, config.top_networks);

    let reporter = ConsoleReporter::new().with_verbose(cli.verbose);
    reporter.render(&report);

    Ok(())
}
