use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bot_launcher::arch::Platform;
use bot_launcher::config::LaunchConfig;

#[derive(Parser)]
#[command(name = "bot-launcher")]
#[command(about = "Open a terminal per trading bot, each with its own local-dev account")]
struct Cli {
    /// Number of bots to launch
    #[arg(long)]
    count: Option<u32>,
    /// First credential index (user<i>@example.com)
    #[arg(long)]
    first_index: Option<u32>,
    /// Python interpreter running the bot
    #[arg(long)]
    interpreter: Option<String>,
    /// Bot script, relative to the working directory
    #[arg(long)]
    script: Option<PathBuf>,
    /// Terminal emulator (POSIX only)
    #[arg(long)]
    terminal: Option<String>,
    /// Render commands for another platform
    #[arg(long, value_enum)]
    platform: Option<Platform>,
    /// JSON launch config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the commands instead of running them
    #[arg(long)]
    dry_run: bool,
    /// Print the launch report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> LaunchConfig {
        LaunchConfig {
            count: self.count,
            first_index: self.first_index,
            interpreter: self.interpreter.clone(),
            script: self.script.clone(),
            terminal: self.terminal.clone(),
            platform: self.platform,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => LaunchConfig::load(path)?,
        None => LaunchConfig::default(),
    };
    let config = base.merge(cli.overrides());

    let report = bot_launcher::run(&config, cli.dry_run).context("invalid launch configuration")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.dry_run {
        for launch in &report.launches {
            println!("{}", launch.command);
        }
    }
    Ok(())
}
