use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordlookup::audio::CommandBackend;
use wordlookup::config::{Config, DEFAULT_PORT};
use wordlookup::db::Database;
use wordlookup::lookup::DictionaryClient;
use wordlookup::session::LookupSession;
use wordlookup::{api, models::LookupOutcome};

#[derive(Parser)]
#[command(name = "wordlookup")]
#[command(about = "Look up English words in a public dictionary")]
struct Cli {
    /// Serve options, used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct ServeArgs {
    /// Port for HTTP
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Serve the lookup page (built-in assets unless WORDLOOKUP_STATIC_DIR is set)
    Serve(ServeArgs),
    /// Look up a word and print the rendered result
    Lookup {
        /// Word to look up; defaults to the last successful lookup
        word: Option<String>,

        /// Play the pronunciation, if the entry has one
        #[arg(long)]
        play: bool,
    },
}

impl Cli {
    /// The command to run, with `serve` as the default.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}

/// Initialize tracing with output to stderr (for lookup mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wordlookup=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Lookup mode prints the fragment on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: Config, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting wordlookup server on port {}", port);

    let app = api::create_router(&config);

    let addr = format!("{}:{}", config.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("wordlookup server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn lookup(config: Config, word: Option<String>, play: bool) -> anyhow::Result<()> {
    let db = Database::open_default().context("Failed to open word store")?;
    db.migrate()?;

    let backend = Arc::new(CommandBackend::from_env());
    let mut session = LookupSession::new(DictionaryClient::new(config.dictionary_url), db)
        .with_audio(backend.clone());

    let ran = match word {
        Some(word) => {
            session.set_input(word);
            session.submit().await
        }
        None => session.bootstrap().await,
    };
    if !ran {
        anyhow::bail!("Nothing to look up: pass a word");
    }

    println!("{}", session.state().view.html);

    if play {
        if let Some(control) = session.audio_control() {
            control.play();
            backend.wait();
        } else if session.state().outcome.as_ref().is_some_and(LookupOutcome::is_success) {
            tracing::info!("No pronunciation available");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = Cli::parse().into_command();

    let use_stderr = matches!(command, Commands::Lookup { .. });
    init_tracing(use_stderr);

    let config = Config::from_env();

    match command {
        Commands::Serve(args) => serve(config, args.port).await?,
        Commands::Lookup { word, play } => lookup(config, word, play).await?,
    }

    Ok(())
}
