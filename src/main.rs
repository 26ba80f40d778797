mod config;
mod error;
mod generator;
mod icon;
mod sink;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use config::AppConfig;
use generator::{GenerationReport, Generator};
use icon::preflight::ensure_png_support;
use icon::render::CircleRenderer;
use sink::FsSink;

#[derive(Parser)]
#[command(
    name = "fireplace-icons",
    about = "Generate placeholder PNG icons for The Fireplace"
)]
struct Cli {
    /// Write icons to <DIR>/icons instead of src-tauri/icons
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// TOML file with a custom palette and slot list
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the progress lines
    let level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("fireplace_icons={level}").parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let report = generate(&cli, std::io::stdout().lock())?;
    tracing::debug!("Generated {:?}", report.written);

    Ok(())
}

/// Load config, check PNG support and write every slot, printing progress to `out`.
fn generate(cli: &Cli, out: impl Write) -> Result<GenerationReport> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    let renderer = CircleRenderer::new(config.palette);
    ensure_png_support(&renderer).context("PNG pre-flight check failed")?;

    let out_dir = match &cli.base_dir {
        Some(base) => AppConfig::output_dir_for(base),
        None => AppConfig::default_output_dir(),
    };
    let sink = FsSink::new(out_dir);
    sink.prepare()?;
    info!("Writing {} icons to {}", config.slots.len(), sink.dir().display());

    let mut generator = Generator::new(&renderer, sink, out);
    Ok(generator.run(&config.slots)?)
}
