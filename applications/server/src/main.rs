/// Kiosk Server - sign-up collection, spreadsheet export, and video signal relay
use clap::{Parser, Subcommand};
use kiosk_core::UserStore;
use kiosk_server::{
    config::ServerConfig, cors_layer, create_router, services::export::EXPORT_FILENAME,
    AppState, BroadcastHub, SpreadsheetExporter,
};
use kiosk_storage::SqliteUserStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kiosk-server")]
#[command(about = "Kiosk backend: user sign-ups, spreadsheet export, video signal relay", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP and WebSocket server
    Serve,
    /// List all stored users
    ListUsers,
    /// Write the user spreadsheet to a file
    Export {
        /// Output file path
        #[arg(short, long, default_value = EXPORT_FILENAME)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiosk_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
        Commands::Export { output } => {
            export(&config, output).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Kiosk Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let store = Arc::new(SqliteUserStore::open(&config.storage.database_url).await?);
    tracing::info!("Database connected, users table ready");

    let hub = Arc::new(BroadcastHub::new(config.realtime.channel_capacity));
    let exporter = Arc::new(SpreadsheetExporter::new());

    // Build application state
    let app_state = AppState::new(store.clone(), hub, exporter);

    // Build router
    let cors = cors_layer(&config.cors)?;
    let app = create_router(app_state, cors);
    tracing::info!("CORS origin: {}", config.cors.allowed_origin);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Database closed, server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = SqliteUserStore::open(&config.storage.database_url).await?;
    let users = store.list_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} <{}> ({})",
            user.id,
            user.name.as_deref().unwrap_or(""),
            user.email.as_deref().unwrap_or(""),
            user.timestamp
        );
    }

    store.close().await;
    Ok(())
}

async fn export(config: &ServerConfig, output: PathBuf) -> anyhow::Result<()> {
    let store = SqliteUserStore::open(&config.storage.database_url).await?;
    let users = store.list_users().await?;
    store.close().await;

    let document = SpreadsheetExporter::new().build_document(&users)?;
    tokio::fs::write(&output, &document).await?;

    tracing::info!("Exported {} users to {}", users.len(), output.display());
    Ok(())
}
