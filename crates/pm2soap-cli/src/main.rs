//! # pm2soap
//!
//! Converts a Postman collection (v2.1 JSON) into a SoapUI REST project.

use anyhow::Context;
use clap::Parser;
use pm2soap_core::ConvertConfig;
use pm2soap_telemetry::{LogFormat, init_telemetry};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Postman collection into a SoapUI project")]
struct Cli {
    /// Path to the Postman collection JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the SoapUI project XML file to write.
    #[arg(short, long)]
    output: PathBuf,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_telemetry(format, cli.verbose);

    let config = ConvertConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let summary = pm2soap_writer::convert_file(&cli.input, &cli.output, &config)
        .with_context(|| format!("Failed to convert {:?}", cli.input))?;

    info!(
        "Done: {} requests converted, {} items skipped",
        summary.requests, summary.skipped
    );
    Ok(())
}
