use anyhow::{Context, Result};
use clap::Parser;
use search_cli::{run, OutputFormat};
use search_core::SearchConfig;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
struct Cli {
    /// Read input from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON search configuration (top_k, stop_words)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of results; overrides the configuration
    #[arg(long)]
    top_k: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::default(),
    };
    if let Some(k) = cli.top_k {
        config.top_k = k;
    }

    let stdout = io::stdout().lock();
    let written = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            run(BufReader::new(file), stdout, &config, cli.format)?
        }
        None => run(io::stdin().lock(), stdout, &config, cli.format)?,
    };
    tracing::debug!(written, "search complete");
    Ok(())
}
