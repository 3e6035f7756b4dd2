mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::awarder::ExpAwarder, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let gamification = Arc::new(startup::gamification_config(&config)?);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    startup::seed_levels(&db).await?;

    let (awarder, awarder_worker) = ExpAwarder::start(db.clone(), gamification.clone());

    let state = AppState::new(db, gamification, awarder, config.internal_api_key.as_str());
    let app = router::router().with_state(state).layer(session);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router, and with it the last awarder handle, is dropped once serving stops,
    // so the worker drains the remaining queue and exits.
    if let Err(e) = awarder_worker.await {
        tracing::error!("EXP award worker panicked: {}", e);
    }

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
