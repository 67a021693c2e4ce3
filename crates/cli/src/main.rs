use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketmood_core::{env_parse_or, DEFAULT_QUERY_LIMIT, DEFAULT_SERVER_PORT, DEFAULT_WINDOW_DAYS};
use marketmood_http::{create_router, AppState};
use marketmood_service::{AnalyticsService, InstrumentService};
use marketmood_storage::{PgStorage, SentimentStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marketmood")]
#[command(about = "Market sentiment tracking service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen port; falls back to SERVER_PORT, then 2022
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// List tracked instruments
    Instruments,
    /// Show every instrument with its current sentiment
    Overview,
    /// Daily sentiment trend for one instrument
    History {
        instrument_id: i32,
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: u32,
        #[arg(short, long, default_value_t = DEFAULT_QUERY_LIMIT)]
        limit: usize,
    },
}

fn database_url() -> Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL environment variable must be set")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let store: Arc<dyn SentimentStore> = Arc::new(PgStorage::new(&database_url()?).await?);

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or_else(|| env_parse_or("SERVER_PORT", DEFAULT_SERVER_PORT));
            let state = Arc::new(AppState::new(store));
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Instruments => {
            let service = InstrumentService::new(store);
            println!("{}", serde_json::to_string_pretty(&service.list().await?)?);
        },
        Commands::Overview => {
            let service = AnalyticsService::new(store);
            let overview = service.instruments_with_sentiment().await?;
            println!("{}", serde_json::to_string_pretty(&overview)?);
        },
        Commands::History { instrument_id, days, limit } => {
            let service = AnalyticsService::new(store);
            let history = service.historical_sentiment(instrument_id, days, limit).await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        },
    }

    Ok(())
}
