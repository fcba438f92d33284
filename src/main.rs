use clap::Parser;
use lookbook_api::{AppState, RestApi};
use lookbook_similarity::{RankingConfig, RankingEngine, RankingMode, DEFAULT_K};
use lookbook_storage::{CatalogStore, FileSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Catalog browsing and similar-item recommendations
#[derive(Parser, Debug)]
#[command(name = "lookbook")]
#[command(about = "Serve a product catalog with embedding-based recommendations", long_about = None)]
struct Args {
    /// Product export (JSON rows with product_id, product_url, product_embedding)
    #[arg(long, default_value = "./data/products.json")]
    products: PathBuf,

    /// Metadata export (JSON rows keyed by PRODUCT_ID)
    #[arg(long, default_value = "./data/metadata.json")]
    metadata: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Seconds before the catalog is reloaded from disk
    #[arg(long, default_value_t = 300)]
    cache_ttl_secs: u64,

    /// Similar items returned when a request does not specify k
    #[arg(long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Reject malformed embeddings instead of scoring them as zero
    #[arg(long)]
    strict: bool,

    /// Ranking config file (JSON with "weights" and "mode")
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn ranking_config(args: &Args) -> anyhow::Result<RankingConfig> {
    let mut config = match &args.weights {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            RankingConfig::from_json(&json)?
        }
        None => RankingConfig::default(),
    };
    if args.strict {
        config.mode = RankingMode::Strict;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting lookbook v{}", env!("CARGO_PKG_VERSION"));
    info!("Products: {:?}", args.products);
    info!("Metadata: {:?}", args.metadata);
    info!("HTTP API port: {}", args.http_port);

    let config = ranking_config(&args)?;
    let engine = RankingEngine::from_config(&config)?;
    info!(
        cosine = config.weights.cosine,
        distance = config.weights.distance,
        pearson = config.weights.pearson,
        mode = ?config.mode,
        "Ranking configured"
    );

    let ttl = Duration::from_secs(args.cache_ttl_secs);
    let source = FileSource::new(&args.products, &args.metadata);
    let store = Arc::new(CatalogStore::open(Box::new(source), ttl)?);

    let refresher = {
        let store = store.clone();
        // Check well inside the TTL so a stale catalog is not served for long
        let period = (ttl / 4).max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                let store = store.clone();
                if let Err(e) = tokio::task::spawn_blocking(move || store.refresh_if_stale()).await {
                    error!("Catalog refresher panicked: {}", e);
                    break;
                }
            }
        })
    };

    let state = Arc::new(AppState::new(store, engine).with_default_k(args.k));
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("lookbook started successfully");
    info!("HTTP API: http://localhost:{}/api/products", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    refresher.abort();
    info!("Shutting down...");
    Ok(())
}
