use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tyd_backends::{OrderedIndex, PrefixStore};
use tyd_core::config::{BackendKind, Config};
use tyd_core::{EngineConfig, LookupEngine, TermBackend, Vocabulary};

#[derive(Parser)]
#[command(name = "tyd", about = "tyd — type-ahead daemon for prefix autocomplete")]
struct Cli {
    /// Vocabulary file (one term per line). Overrides server.vocab_path.
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Listen address. Overrides server.listen.
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Backend adapter: "ordered" or "prefix". Overrides backend.kind.
    #[arg(long)]
    backend: Option<String>,

    /// Log at debug level instead of info.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "tyd=debug,tyd_core=debug,tyd_backends=debug,tyd_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load()?;
    if let Some(listen) = cli.listen {
        config.server.listen = listen.to_string();
    }
    if let Some(vocab) = &cli.vocab {
        config.server.vocab_path = vocab.display().to_string();
    }
    if let Some(backend) = &cli.backend {
        config.backend.kind = match backend.as_str() {
            "ordered" => BackendKind::Ordered,
            "prefix" => BackendKind::Prefix,
            other => anyhow::bail!("unknown backend {other:?} (expected \"ordered\" or \"prefix\")"),
        };
    }
    config.validate()?;

    if config.server.vocab_path.is_empty() {
        anyhow::bail!("no vocabulary file: pass --vocab or set server.vocab_path");
    }
    let vocab = Vocabulary::load(&config.server.vocab_path)?;
    if vocab.is_empty() {
        tracing::warn!("vocabulary is empty; every lookup will return no matches");
    }

    tracing::info!(
        backend = ?config.backend.kind,
        terms = vocab.len(),
        window = config.lookup.window,
        listen = %config.server.listen,
        "starting tyd"
    );

    match config.backend.kind {
        BackendKind::Ordered => run(OrderedIndex::new(&vocab), &config).await,
        BackendKind::Prefix => run(PrefixStore::new(&vocab)?, &config).await,
    }
}

async fn run<B: TermBackend + 'static>(backend: B, config: &Config) -> anyhow::Result<()> {
    let engine = LookupEngine::new(
        backend,
        EngineConfig {
            window: config.lookup.window,
            timeout: config.lookup.timeout(),
        },
    );
    let listen: SocketAddr = config.server.listen.parse()?;
    tyd_http::serve(listen, tyd_http::router(engine)).await
}
