//! `seminorm-conformance`: samples the seminorm crate and validates its laws.
//!
//! Runs the complete conformance suite across:
//! - Seminorm laws (zero, subadditivity, homogeneity) for a catalog of seminorms
//! - Lattice operations (join, infimal-convolution meet, suprema of families)
//! - Ball geometry (images, monotonicity, scaling, absorbency)
//! - Continuity moduli derived from a bounded neighbourhood
//!
//! **Usage:**
//! ```text
//! seminorm-conformance [--config <path>] [--samples <n>] [--seed <n>] [--json] [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use seminorm_conformance::{run_all, ConformanceConfig, Severity};
use tracing_subscriber::EnvFilter;

/// Run the seminorm conformance suite.
#[derive(Parser)]
#[command(
    name = "seminorm-conformance",
    about = "Validate seminorm laws, lattice, ball geometry and continuity on sampled points"
)]
struct Args {
    /// TOML configuration file (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of sample points per validator (overrides the file).
    #[arg(long)]
    samples: Option<usize>,

    /// Sample seed (overrides the file).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ConformanceConfig::load(path)?,
        None => ConformanceConfig::default(),
    };
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let report = run_all(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.all_passed() {
            process::exit(1);
        }
        return Ok(());
    }

    // Print results
    println!("Seminorm Conformance Report");
    println!("===========================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {} — {}", status, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let summary = report.summary();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        summary.passed, summary.warnings, summary.failed
    );

    if summary.failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", summary.failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
