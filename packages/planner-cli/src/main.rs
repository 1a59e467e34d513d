//! `planctl`: reads a `PlanRequest` JSON document from a file or stdin,
//! runs the placement planner, and writes the resulting `PlanResponse`
//! JSON document to stdout.

use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use placement_planner_cli::config::CliConfig;
use placement_planner_cli::request::{PlanRequestDoc, PlanResponseDoc};
use placement_planner_core::{plan_next_map, validate, PlanRequest};

/// Compute the next partition placement for a cluster.
#[derive(Debug, Parser)]
#[command(name = "planctl", version, about)]
struct Cli {
    /// Path to a `PlanRequest` JSON document. Reads stdin when omitted.
    #[arg(long, short = 'f')]
    request_file: Option<PathBuf>,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pretty: bool,

    /// `tracing_subscriber::EnvFilter` directive, e.g. "debug" or
    /// "placement_planner_core=debug,info". `RUST_LOG` takes precedence.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig {
        log_level: cli.log_level.clone(),
        pretty: cli.pretty,
    };
    init_tracing(&config);

    let raw = read_request(cli.request_file.as_deref())?;
    let doc: PlanRequestDoc =
        serde_json::from_str(&raw).context("parsing plan request JSON")?;
    let request: PlanRequest = doc.into();

    for problem in validate(&request) {
        tracing::warn!(%problem, "plan request has a structural issue, ignoring the offending entry");
    }

    tracing::info!(
        partitions = request.prev_map.len(),
        nodes = request.all_nodes.len(),
        "planning next partition map"
    );
    let outcome = plan_next_map(&request);
    tracing::info!(
        warnings = outcome.warnings.len(),
        "planning complete"
    );

    let response = PlanResponseDoc::from(outcome);
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("serializing plan response")?;
    println!("{rendered}");

    Ok(())
}

fn read_request(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading plan request from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading plan request from stdin")?;
            Ok(buf)
        }
    }
}

fn init_tracing(config: &CliConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
