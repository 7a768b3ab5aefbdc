use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::config::{Config, Deployment};
use roster::db::{AppState, create_pool, init_db};
use roster::handlers;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Organisation, employee and user record service")]
struct Cli {
    /// Route set to serve (overrides ROSTER_DEPLOYMENT)
    #[arg(long, value_enum)]
    deployment: Option<Deployment>,

    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(deployment) = cli.deployment {
        config.deployment = deployment;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    let db_pool = create_pool(&config.database_path).expect("Failed to create database pool");
    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
    }
    tracing::info!("Using database {}", config.database_path);

    let state = AppState { db: db_pool };

    let app = handlers::router(config.deployment)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Serving {:?} deployment on {}", config.deployment, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
