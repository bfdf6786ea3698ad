mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use roster_config as config;
use roster_sync::HttpUserSource;

#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Fetch user records and print them as CSV"
)]
struct Cli {
    /// Config file to load instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
    /// Endpoint returning a JSON array of users
    #[arg(long)]
    url: Option<String>,
    /// Total request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Log debug details to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        url,
        timeout_secs,
        verbose,
    } = cli;

    let mut app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    if let Some(url) = url {
        app_config.source.url =
            config::validate_source_url(url.trim()).with_context(|| "parse --url")?;
    }
    if let Some(timeout_secs) = timeout_secs {
        app_config.source.timeout_secs =
            config::validate_timeout(timeout_secs).with_context(|| "parse --timeout-secs")?;
    }

    let source_config = app_config.source;
    debug!(
        url = %source_config.url,
        timeout_secs = source_config.timeout_secs,
        "source configured"
    );
    let source = HttpUserSource::new(
        source_config.url,
        Duration::from_secs(source_config.timeout_secs),
        source_config.user_agent,
    );

    let mut stdout = io::stdout().lock();
    commands::export::export_users(&source, &mut stdout)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
