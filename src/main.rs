//! Web-Analyzer main entry point
//!
//! This is the command-line interface for the Web-Analyzer page analysis
//! service. Without `--analyze` it runs the HTTP server.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use web_analyzer::config::{load_config_or_default, Config, ConfigSource};
use web_analyzer::output::format_text_summary;
use web_analyzer::{Analyzer, PageDownloader};

/// Web-Analyzer: structural analysis of web pages
///
/// Reports a page's HTML version, title, headings, login form presence,
/// internal and external links, and how many of those links are unreachable.
#[derive(Parser, Debug)]
#[command(name = "web-analyzer")]
#[command(version)]
#[command(about = "Analyze the structure and links of a web page", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used if it does not exist)
    #[arg(value_name = "CONFIG", default_value = "config/config.toml")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Analyze a single URL, print the result and exit instead of serving
    #[arg(long, value_name = "URL")]
    analyze: Option<String>,

    /// Print the analysis as JSON (with --analyze)
    #[arg(long, requires = "analyze")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Configuration is read before logging is set up, since it carries the level
    let (config, source) = load_config_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    setup_logging(cli.verbose, cli.quiet, &config.logger.level);

    match source {
        ConfigSource::File { hash } => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            cli.config.display(),
            hash
        ),
        ConfigSource::Defaults => tracing::warn!(
            "Config file {} not found, using defaults",
            cli.config.display()
        ),
    }

    match cli.analyze {
        Some(url) => handle_analyze(&config, &url, cli.json).await,
        None => web_analyzer::server::serve(&config)
            .await
            .context("HTTP server failed"),
    }
}

/// Sets up the logging/tracing subscriber
///
/// `-v`/`-q` take precedence over the configured level.
fn setup_logging(verbose: u8, quiet: bool, configured_level: &str) {
    let level = configured_level.to_lowercase();
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new(format!(
                "web_analyzer={},tower_http={},warn",
                level, level
            )),
            1 => EnvFilter::new("web_analyzer=debug,tower_http=debug,info"),
            2 => EnvFilter::new("web_analyzer=trace,tower_http=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --analyze mode: download, analyze and print one page
async fn handle_analyze(config: &Config, url: &str, json: bool) -> Result<()> {
    let downloader = PageDownloader::from_config(&config.analyzer)
        .context("Failed to build HTTP client")?;
    let analyzer =
        Analyzer::from_config(&config.analyzer).context("Failed to build HTTP client")?;

    let content = downloader
        .download(url)
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    let cancel = CancellationToken::new();
    let result = analyzer
        .analyze_with_deadline(url, &content, &cancel)
        .await
        .with_context(|| format!("Failed to analyze {}", url))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_text_summary(url, &result));
    }

    Ok(())
}
