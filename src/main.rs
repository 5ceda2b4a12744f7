mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::auction_sweeper, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let mut sweeper = auction_sweeper::start_scheduler(db.clone()).await?;

    let state = AppState::new(db.clone(), http_client, oauth_client, &config);
    let app = router::apply_layers(router::router(), config.app_url.as_deref())?
        .layer(session)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutting down");

    sweeper.shutdown().await?;
    db.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
