use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kotoba_config::Config;
use kotoba_core::{LookupOutcome, Session};
use kotoba_gateway::Upstream;
use kotoba_lang_japanese::{JapaneseEngineLoader, JishoProvider};
use kotoba_types::ReadingStyle;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::events::lookup::display_result;
use self::events::text_input::display_tokens;
use self::state::AppState;

/// Japanese reading assistant: furigana annotation and dictionary lookup
#[derive(Debug, Parser)]
#[command(name = "kotoba", version)]
struct Cli {
    /// JSON profile to load instead of the environment
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Furigana script: hiragana, katakana or romaji
    #[arg(long, global = true)]
    style: Option<ReadingStyle>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the dictionary lookup gateway over HTTP
    Serve {
        /// Listen address, overrides the configured one
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Read text from stdin interactively (default)
    Run,
    /// Annotate one piece of text and exit
    Analyze {
        text: String,
        /// Also look up every token
        #[arg(long)]
        lookup: bool,
        /// With --lookup, list every dictionary candidate instead of the best one
        #[arg(long, requires = "lookup")]
        all: bool,
    },
    /// Write the effective configuration to a profile file
    InitProfile {
        path: PathBuf,
        #[arg(long, default_value = "main")]
        name: String,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

fn build_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let provider = JishoProvider::new(
        config.network.lookup_url(),
        Duration::from_secs(config.network.timeout_seconds),
    )?;
    tracing::info!("Dictionary lookups go to {}", provider.endpoint());

    Ok(Arc::new(AppState::new(
        config,
        Arc::new(JapaneseEngineLoader::new()),
        Arc::new(provider),
    )))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(style) = cli.style {
        config.session.reading_style = style;
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Run => run(build_state(config)?).await,
        Command::Analyze { text, lookup, all } => {
            let mode = match (lookup, all) {
                (false, _) => LookupMode::Off,
                (true, false) => LookupMode::Best,
                (true, true) => LookupMode::All,
            };
            analyze(build_state(config)?, &text, mode).await
        }
        Command::InitProfile { path, name } => profile::save_profile(&path, &name, &config),
    }
}

async fn serve(config: Config, bind: Option<SocketAddr>) -> anyhow::Result<()> {
    let bind_addr = match bind {
        Some(addr) => addr,
        None => config
            .network
            .bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", config.network.bind_addr))?,
    };
    let upstream = Upstream::new(
        config.network.upstream_url.clone(),
        Duration::from_secs(config.network.timeout_seconds),
    )?;

    tokio::select! {
        result = kotoba_gateway::serve(bind_addr, upstream) => result?,
        _ = signal::ctrl_c() => tracing::info!("Shutdown requested"),
    }
    Ok(())
}

/// Interactive mode; returns on `:quit`, end of input or Ctrl+C
async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupMode {
    Off,
    Best,
    All,
}

async fn analyze(state: Arc<AppState>, text: &str, mode: LookupMode) -> anyhow::Result<()> {
    state.session.init().await?;
    print!("{}", analysis_report(&state.session, text, mode).await?);
    Ok(())
}

/// Annotated token rows, followed by dictionary entries per `mode`
async fn analysis_report(
    session: &Session,
    text: &str,
    mode: LookupMode,
) -> anyhow::Result<String> {
    let tokens = session.analyze(text).await?;
    let annotations = session.annotate_tokens(&tokens).await?;
    let mut out = ui::render_tokens(&display_tokens(&tokens, annotations));

    for token in &tokens {
        match mode {
            LookupMode::Off => break,
            LookupMode::Best => match session.lookup(token).await? {
                LookupOutcome::Applied(Some(entry)) => {
                    out.push_str(&ui::render_result(&display_result(entry)))
                }
                LookupOutcome::Applied(None) => {
                    out.push_str(&format!("{}: no entry\n", token.base_form))
                }
                LookupOutcome::Stale => {}
            },
            LookupMode::All => {
                let entries = session.lookup_all(token).await?;
                if entries.is_empty() {
                    out.push_str(&format!("{}: no entry\n", token.base_form));
                }
                for entry in entries {
                    out.push_str(&ui::render_result(&display_result(entry)));
                }
            }
        }
    }
    Ok(out)
}
