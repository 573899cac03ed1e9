//! adsight - hypothesis generation and validation for ad metrics
//!
//! Reads raw ad rows or a pre-built summary, proposes explanations for the
//! performance it sees, validates each against the data and writes the
//! JSON report to stdout. Logs go to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod pipeline;

use config::CliConfig;
use pipeline::Input;

/// adsight CLI
#[derive(Parser)]
#[command(name = "adsight")]
#[command(
    about = "adsight - propose and validate explanations for ad performance",
    long_about = None
)]
#[command(version)]
#[command(group(ArgGroup::new("input").required(true).args(["records", "summary"])))]
struct Cli {
    /// Raw ad records (`.csv` with a header row, otherwise a JSON array)
    #[arg(long)]
    records: Option<PathBuf>,

    /// Pre-built metrics summary (JSON)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Validate these hypotheses (JSON array) instead of generating them
    #[arg(long)]
    hypotheses: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "ADSIGHT_CONFIG")]
    config: Option<String>,

    /// Log level
    #[arg(long, env = "ADSIGHT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "ADSIGHT_LOG_JSON")]
    json_logs: bool,

    /// Evaluate hypotheses on parallel worker tasks
    #[arg(long)]
    concurrent: bool,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn input(&self) -> Option<Input> {
        match (&self.records, &self.summary) {
            (Some(path), _) => Some(Input::Records(path.clone())),
            (None, Some(path)) => Some(Input::Summary(path.clone())),
            (None, None) => None,
        }
    }
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, cli.json_logs || config.logging.json);

    let input = cli.input().context("one of --records or --summary is required")?;
    let analysis = &config.analysis;

    let summary = pipeline::read_summary(&input, analysis).context("reading input")?;
    let hypotheses = pipeline::read_or_generate(cli.hypotheses.as_ref(), &summary, analysis)
        .context("loading hypotheses")?;
    let output = pipeline::evaluate(hypotheses, summary, analysis, cli.concurrent).await;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut handle, &output).map_err(error::CliError::from)?;
    } else {
        serde_json::to_writer(&mut handle, &output).map_err(error::CliError::from)?;
    }
    writeln!(handle)?;
    Ok(())
}
