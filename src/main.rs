//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `prow_metrics` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use prow_metrics::initialization::{init_client, init_logger_with};
use prow_metrics::{
    fetch_metrics_archive, generate_app_label, resolve, ChannelReporter, Config, OutputFormat,
    ReportLocation, ResolvedArchive, StatusKind, StatusMessage, StatusReporter,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Host prefixes are commonly kept in a .env file next to the deployment
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let (tx, mut rx) = mpsc::unbounded_channel::<StatusMessage>();
    let output = config.output.clone();
    let printer = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            print_status(&msg, &output);
        }
    });

    let reporter = ChannelReporter::new(tx);
    let result = run(&config, &reporter).await;
    match &result {
        Ok(archive) => reporter.report(StatusKind::Done, archive.archive_url.as_str()),
        Err(e) => reporter.report(StatusKind::Failure, &format!("{e:#}")),
    }
    // Closing the channel lets the printer finish
    drop(reporter);
    finish_printer(printer).await;

    match result {
        Ok(archive) => {
            print_archive(&archive, &config.output)?;
            Ok(())
        }
        // Already reported as a failure status
        Err(_) => process::exit(1),
    }
}

async fn run(config: &Config, reporter: &ChannelReporter) -> Result<ResolvedArchive> {
    let client = init_client(config.timeout_seconds, &config.user_agent)
        .context("Failed to initialize HTTP client")?;
    let hosts = config.host_prefixes();
    let report = ReportLocation::new(config.report_url.clone());

    let label = generate_app_label(&mut rand::rng());
    reporter.report(StatusKind::AppLabel, &label);
    reporter.report(
        StatusKind::Progress,
        &format!("Looking up prometheus archive for {report}"),
    );

    let archive = if config.skip_validation {
        resolve(&client, &hosts, &report).await?
    } else {
        fetch_metrics_archive(&client, &hosts, &report, reporter).await?
    };
    Ok(archive)
}

/// Waits for the status printer and warns if it died before draining.
///
/// Returns whether the printer finished cleanly.
async fn finish_printer(printer: JoinHandle<()>) -> bool {
    match printer.await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Status printer stopped early, some status lines may be missing: {e}");
            false
        }
    }
}

fn print_status(msg: &StatusMessage, output: &OutputFormat) {
    match output {
        OutputFormat::Json => match serde_json::to_string(msg) {
            Ok(line) => eprintln!("{line}"),
            Err(e) => log::warn!("Failed to serialize status message: {e}"),
        },
        OutputFormat::Plain => eprintln!("[{}] {}", msg.action, msg.message),
    }
}

fn print_archive(archive: &ResolvedArchive, output: &OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(archive).context("Failed to serialize result")?;
            println!("{json}");
        }
        OutputFormat::Plain => {
            println!("Started:  {}", archive.window.started.to_rfc3339());
            println!("Finished: {}", archive.window.finished.to_rfc3339());
            println!(
                "Duration: {}s",
                archive.window.duration().num_seconds()
            );
            println!("Archive:  {}", archive.archive_url);
        }
    }
    Ok(())
}
