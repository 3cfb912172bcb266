//! Baseline detector - finds which basket a team defends from tracking data
//!
//! Reads one CSV export of player positions, votes per timestamp on which team
//! is closer to the left basket, and prints the side team 1 defends.
//!
//! Output:
//! - stdout: the verdict line, nothing else
//! - stderr: `no data for team <n> at <ts> ms` per incomplete timestamp, plus logs
//!
//! Optional settings are read from the TOML file named by CONFIG_FILE.
//! Log level is controlled via RUST_LOG (default: warn).

use anyhow::Context;
use baseline_detector::infra::Config;
use baseline_detector::io::read_records;
use baseline_detector::services::analyze;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Detect the baseline of team 1 in a basketball game
#[derive(Parser, Debug)]
#[command(name = "baseline-detector", version, about)]
struct Args {
    /// Path to a CSV formatted file of basketball player position data
    filepath: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::load();
    let settings = config.analysis_settings();
    info!(
        config_file = %config.config_file(),
        left_basket = %config.left_basket(),
        primary_group_id = %config.primary_group_id(),
        strict_groups = %config.strict_groups(),
        "config_loaded"
    );

    let records = read_records(&args.filepath)
        .with_context(|| format!("cannot ingest {}", args.filepath.display()))?;
    info!(path = %args.filepath.display(), records = %records.len(), "records_loaded");

    let analysis = analyze(records, &settings, |missing| eprintln!("{missing}"))
        .with_context(|| format!("cannot decide baseline from {}", args.filepath.display()))?;

    analysis.summary.log();
    info!(
        left_defender = %analysis.verdict.left_defender,
        side = %analysis.verdict.side,
        "baseline_decided"
    );
    println!("{}", analysis.verdict);

    Ok(())
}
