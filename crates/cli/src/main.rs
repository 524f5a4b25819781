use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use moviesearch_api::{CatalogProvider, SearchProvider, TmdbClient};
use moviesearch_types::EnterPolicy;
use moviesearch_util::{AppConfig, default_log_path};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search movie titles as you type.
#[derive(Debug, Parser)]
#[command(name = "moviesearch", version, about)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    /// Where TUI logs are written
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Flags layered over the config file and environment.
#[derive(Debug, Args, Default)]
struct Overrides {
    /// Maximum number of suggestions shown
    #[arg(long, global = true, value_name = "N")]
    limit: Option<usize>,

    /// Quiet period before a query is sent, in milliseconds
    #[arg(long = "debounce-ms", global = true, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Start with the input unfocused
    #[arg(long, global = true)]
    no_autofocus: bool,

    /// What Enter does with no highlighted suggestion
    #[arg(long, global = true, value_name = "POLICY")]
    enter_policy: Option<EnterPolicy>,

    /// Search the built-in catalog instead of the network
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive autocomplete (default)
    Tui,
    /// Print titles matching QUERY and exit
    Search {
        query: String,
        /// Print a JSON array instead of one title per line
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration with secrets masked
    Config,
}

impl Overrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(limit) = self.limit {
            config.autocomplete.suggestions_limit = limit;
        }
        if let Some(delay) = self.debounce_ms {
            config.autocomplete.debounce_delay_ms = delay;
        }
        if self.no_autofocus {
            config.autocomplete.autofocus = false;
        }
        if let Some(policy) = self.enter_policy {
            config.autocomplete.enter_policy = policy;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    match &command {
        Command::Tui => {
            let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
            init_file_tracing(&log_path)?;
        }
        Command::Search { .. } | Command::Config => init_stderr_tracing(),
    }

    let mut config = AppConfig::load().context("failed to load configuration")?;
    cli.overrides.apply(&mut config);
    config.validate()?;

    match command {
        Command::Tui => {
            let provider = build_provider(&config, cli.overrides.offline)?;
            moviesearch_tui::run(config.autocomplete, provider).await
        }
        Command::Search { query, json } => {
            let provider = build_provider(&config, cli.overrides.offline)?;
            run_search(provider.as_ref(), &query, config.autocomplete.suggestions_limit, json).await
        }
        Command::Config => {
            println!("{}", config.to_redacted_json()?);
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so its logs go to a file.
fn init_file_tracing(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_provider(config: &AppConfig, offline: bool) -> Result<Arc<dyn SearchProvider>> {
    if offline {
        info!("searching the built-in catalog");
        return Ok(Arc::new(CatalogProvider::builtin()));
    }
    let timeout = Duration::from_millis(config.autocomplete.request_timeout_ms);
    let client = TmdbClient::new(&config.api_base_url, config.api_token.as_deref(), timeout)
        .context("failed to create the movie search client")?;
    info!(base_url = %client.base_url(), "searching the movie database");
    Ok(Arc::new(client))
}

async fn run_search(provider: &dyn SearchProvider, query: &str, limit: usize, json: bool) -> Result<()> {
    let mut titles = provider.search(query).await?;
    titles.truncate(limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&titles)?);
    } else {
        for title in &titles {
            println!("{title}");
        }
    }
    Ok(())
}
