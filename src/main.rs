use anyhow::{Context, Result};
use clap::Parser;
use seedex::config::Config;
use seedex::pipeline::{Pipeline, RunSummary};
use seedex::seeds::load_seeds;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "seedex",
    version,
    about = "One-shot batch indexer for seed URL lists",
    long_about = None
)]
struct Cli {
    /// File containing one seed URL per line
    seeds_file: PathBuf,

    /// Base URL of the index server
    server_url: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_cli();

    let config = load_config(&cli)?;

    let verbose = cli.verbose || matches!(config.logging.level.as_str(), "debug" | "trace");
    let format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(format, verbose)?;

    tracing::info!(
        seeds_file = %cli.seeds_file.display(),
        server_url = %config.indexer.server_url,
        "seedex starting"
    );

    let seeds = load_seeds(&cli.seeds_file)
        .with_context(|| format!("Failed to read seeds file {}", cli.seeds_file.display()))?;

    let pipeline = Pipeline::new(&config.indexer.server_url, config.request_timeout())?;
    let summary = pipeline.run(&seeds).await;

    print_summary(&summary);

    tracing::info!("seedex completed");
    Ok(())
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.use_stderr() {
                // Invocation errors report usage on stdout, not stderr
                println!("Usage: seedex <seeds_file> [server_url]");
                std::process::exit(2);
            }
            // --help and --version render their own output
            err.exit()
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    if let Some(server_url) = &cli.server_url {
        config.indexer.server_url = server_url.clone();
    }

    config.validate()?;
    Ok(config)
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("seedex=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("seedex=info,warn")
    };

    // Diagnostics go to stderr so stdout carries only per-URL lines
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("Run Summary");
    println!("===========");
    println!("Seeds processed: {}", summary.total());
    println!("Indexed: {}", summary.indexed_count());
    println!("Failed: {}", summary.failed_count());
    println!("Success rate: {:.1}%", summary.success_rate() * 100.0);
}
