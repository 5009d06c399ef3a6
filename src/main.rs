// src/main.rs

use std::{net::SocketAddr, sync::Arc, time::Duration};

use quiz_backend::config::Config;
use quiz_backend::routes;
use quiz_backend::state::AppState;
use quiz_backend::storage::{question_store::QuestionStore, result_store::ResultStore};
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    for (key, raw) in Config::invalid_vars() {
        tracing::warn!("{}={} is not valid, using the default", key, raw);
    }

    // Load both stores from their snapshot files
    let questions = Arc::new(QuestionStore::open(&config.questions_file).await);
    let results = Arc::new(ResultStore::open(&config.results_file).await);

    // Pick up edits made to the results file outside this process
    if config.results_refresh_secs > 0 {
        results
            .clone()
            .spawn_refresh(Duration::from_secs(config.results_refresh_secs));
    }

    // Create AppState
    let state = AppState {
        questions,
        results,
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
