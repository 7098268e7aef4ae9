//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the report as JSON
//!
//! All audit logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process;

use seo_audit::config::Opt;
use seo_audit::initialization::init_logger_with;
use seo_audit::{AuditReport, Auditor, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    let config = Config::from(&opt);
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let auditor = Auditor::new(&config).context("Failed to initialize HTTP client")?;

    let failed = if opt.full {
        print_report(&auditor.full(&opt.url).await, opt.pretty)?
    } else {
        print_report(&auditor.basic(&opt.url).await, opt.pretty)?
    };

    if failed {
        process::exit(1);
    }
    Ok(())
}

/// Writes the report to stdout; returns whether it is an error report.
fn print_report<T: Serialize>(report: &AuditReport<T>, pretty: bool) -> Result<bool> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .context("Failed to serialize report")?;
    println!("{json}");
    Ok(report.is_error())
}
