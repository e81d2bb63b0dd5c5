//! courier - interactive shipment tracking console.
//!
//! Logs go to stderr (`RUST_LOG`, or `--verbose` for debug); the menu owns
//! stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use courier_core::CourierBuilder;
use courier_core::domain::IssueDate;
use tracing::info;

mod menu;
mod validate;

use menu::Menu;

#[derive(Parser)]
#[command(name = "courier", about = "Shipment tracking and dispatch priority console", version)]
struct Cli {
    /// Route topology file (TOML). Defaults to the built-in Marmara network.
    #[arg(short, long)]
    topology: Option<PathBuf>,

    /// Issue date for shipments queued through the dispatch option (YYYYMMDD).
    /// Defaults to today.
    #[arg(long)]
    dispatch_date: Option<String>,

    /// Destinations the topology must contain (comma-separated); startup
    /// fails if any is missing.
    #[arg(long, value_delimiter = ',')]
    expect: Vec<String>,

    /// Print a JSON snapshot of the session counts on exit.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn builder_from(cli: &Cli) -> CourierBuilder {
    let mut builder = CourierBuilder::new();
    if let Some(path) = &cli.topology {
        info!(path = %path.display(), "loading route topology");
        builder = builder.topology_file(path);
    }
    if !cli.expect.is_empty() {
        let names: Vec<&str> = cli.expect.iter().map(|n| n.trim()).collect();
        builder = builder.expect_destinations(&names);
    }
    builder
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut courier = builder_from(&cli).build()?;

    let dispatch_date = match &cli.dispatch_date {
        Some(raw) => validate::issue_date(raw)?,
        None => IssueDate::parse(&chrono::Local::now().format("%Y%m%d").to_string())?,
    };
    info!(
        route_nodes = courier.topology().len(),
        dispatch_date = %dispatch_date,
        "courier ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut courier, stdin.lock(), stdout.lock(), dispatch_date).run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&courier.counts())?);
    }
    Ok(())
}
