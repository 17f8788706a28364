use anyhow::Context;
use clap::Parser;
use tracing::info;

use signup_sheet_api::{app, config::AppConfig, database::DatabaseManager, shutdown::shutdown_signal, AppState};

#[derive(Parser)]
#[command(name = "signup-sheet-api")]
#[command(about = "Class sign-up sheet API server")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Port to listen on (overrides PORT)")]
    port: Option<u16>,

    #[arg(long, help = "sqlite database URL (overrides DATABASE_URL)")]
    database_url: Option<String>,

    #[arg(long, help = "Do not accept or return the class date field")]
    disable_date: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, DATABASE_URL, FRONTEND_URL
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_sheet_api=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    if cli.disable_date {
        config.classes.date_field_enabled = false;
    }

    info!("Starting sign-up sheet API in {:?} mode", config.environment);
    info!("Allowed origins: {:?}", config.security.cors_origins);

    let db = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    db.init_schema().await.context("failed to create tables")?;

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);

    let router = app(AppState::new(db.clone(), config));
    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served.context("server error")?;
    Ok(())
}
