/// Lango Server - username checks and summary retrieval
use anyhow::Context;
use clap::{Parser, Subcommand};
use lango_core::{Summary, SummaryId, SummaryStore, Username};
use lango_server::{build_state, config::ServerConfig, create_router};
use lango_storage::LocalStorageContext;
use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "lango_server=info,lango_storage=info,tower_http=info";

#[derive(Parser)]
#[command(name = "lango-server")]
#[command(about = "Lango username and summary API server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "LANGO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a profile username
    AddProfile {
        /// Username (normalized before insert)
        #[arg(short, long)]
        username: String,
    },
    /// Store a summary payload from a JSON file in the database
    ImportSummary {
        /// Path to the JSON payload
        path: PathBuf,
    },
    /// List stored summaries
    ListSummaries,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::AddProfile { username } => add_profile(&config, &username).await,
        Commands::ImportSummary { path } => import_summary(&config, &path).await,
        Commands::ListSummaries => list_summaries(&config).await,
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn open_storage(config: &ServerConfig) -> anyhow::Result<LocalStorageContext> {
    let pool = lango_storage::create_pool(&config.storage.database_url)
        .await
        .with_context(|| format!("opening {}", config.storage.database_url))?;
    lango_storage::run_migrations(&pool).await?;
    Ok(LocalStorageContext::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host {:?}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    let storage = open_storage(&config).await?;
    tracing::info!(
        backend = ?config.storage.summary_backend,
        capacity = config.storage.summary_capacity,
        "Summary store ready"
    );

    let app = create_router(build_state(&config, storage));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Lango server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn add_profile(config: &ServerConfig, username: &str) -> anyhow::Result<()> {
    let username = Username::parse(username)?;
    let storage = open_storage(config).await?;

    let profile = lango_storage::profiles::create(storage.pool(), username.as_str()).await?;
    tracing::info!("Created profile {} ({})", profile.username, profile.id);

    Ok(())
}

async fn import_summary(config: &ServerConfig, path: &Path) -> anyhow::Result<()> {
    if !config.serves_database_summaries() {
        anyhow::bail!(
            "storage.summary_backend is \"memory\"; imported summaries would never be served"
        );
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&contents)?;

    let mut summary = Summary::new(SummaryId::generate(), payload);
    if let Some(ttl) = config.summary_ttl() {
        summary = summary.with_ttl(ttl);
    }
    let id = summary.id.clone();

    let storage = open_storage(config).await?;
    storage.save(summary).await?;

    println!("{}", id);
    Ok(())
}

async fn list_summaries(config: &ServerConfig) -> anyhow::Result<()> {
    let storage = open_storage(config).await?;
    let summaries = storage.list().await?;

    println!("Summaries:");
    for summary in summaries {
        println!(
            "  {} - {} ({})",
            summary.id,
            summary.slug.as_deref().unwrap_or("-"),
            summary.created_at.to_rfc3339()
        );
    }

    Ok(())
}
