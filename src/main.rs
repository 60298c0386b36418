use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use fyyur::{config, db, seed, server};

/// Stderr logging, plus an INFO-and-above file log when `ERROR_LOG` is set outside debug mode
fn init_tracing(config: &config::Config) {
    let file_layer = match (&config.error_log, config.debug) {
        (Some(path), false) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(LevelFilter::INFO),
            ),
            Err(e) => {
                eprintln!("Cannot open log file {}: {}", path, e);
                None
            }
        },
        _ => None,
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fyyur=debug,tower_http=debug".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();
}

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(&config);

    if config.secret_key.is_none() {
        tracing::warn!("SECRET_KEY is not set");
    }
    if config.debug {
        tracing::debug!("Debug mode enabled");
    }

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    // Check for seed flag
    if config.seed_demo || std::env::args().any(|arg| arg == "--seed") {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    if let Err(e) = server::serve(db, &config.bind_addr()).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
