mod render;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use lore_core::config::Config;
use lore_core::{Query, ReloadPolicy, Store, StoreHandle};
use lore_server::wire::SearchResponse;
use lore_server::AppState;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lore", about = "lore: keyword search over a nested lore book")]
struct Cli {
    /// Write debug logs to /tmp/lore-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/lore/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve GET /search over HTTP.
    Serve {
        /// Store document (JSON object keyed by entity name).
        #[arg(long)]
        store: Option<PathBuf>,
        /// Address to listen on, e.g. 127.0.0.1:3000.
        #[arg(long)]
        bind: Option<String>,
        /// When to read the store document.
        #[arg(long, value_enum)]
        reload: Option<Reload>,
    },
    /// Run one search and print the results.
    Query {
        /// Text to search for.
        text: String,
        #[arg(long)]
        store: Option<PathBuf>,
        #[arg(long)]
        case_sensitive: bool,
        #[arg(long)]
        whole_words: bool,
        /// Accepted for compatibility; matching stays exact.
        #[arg(long)]
        fuzzy: bool,
        #[arg(long)]
        sort_by_relevance: bool,
        /// Print the HTTP response body instead of a listing.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Reload {
    Startup,
    PerRequest,
}

impl From<Reload> for ReloadPolicy {
    fn from(r: Reload) -> Self {
        match r {
            Reload::Startup => ReloadPolicy::Startup,
            Reload::PerRequest => ReloadPolicy::PerRequest,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config: falling back to defaults");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Serve { store, bind, reload } => {
            let path = store.unwrap_or_else(|| config.store.path.clone());
            let policy = reload.map(Into::into).unwrap_or(config.store.reload);
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());

            let handle = StoreHandle::open(&path, policy)
                .with_context(|| format!("opening store {}", path.display()))?;
            let state = Arc::new(AppState::new(handle, config.highlight.clone()));

            tokio::runtime::Runtime::new()?
                .block_on(lore_server::serve(&bind, state))
                .with_context(|| format!("serving on {bind}"))
        }
        Command::Query {
            text,
            store,
            case_sensitive,
            whole_words,
            fuzzy,
            sort_by_relevance,
            json,
        } => {
            let path = store.unwrap_or_else(|| config.store.path.clone());
            let snapshot = Store::load(&path)?;
            let query = Query::new(text)
                .case_sensitive(case_sensitive)
                .whole_words(whole_words)
                .fuzzy(fuzzy)
                .sort_by_relevance(sort_by_relevance);

            let results = lore_core::search_with(&snapshot, &query, &config.highlight)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&SearchResponse::new(results))?);
            } else {
                print!("{}", render::render_results(&results, &config));
            }
            Ok(())
        }
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/lore-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("lore debug log started, tail -f /tmp/lore-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}
