use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use portfolio_api::{
    constants::mark_process_start,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    settings::AppConfig,
    startup::run,
    AppState,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    mark_process_start();

    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(config.is_production());

    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to create database connection pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let app_state = web::Data::new(AppState::from_pool(&config, pool));

    if let Some((username, password)) = config.admin_seed() {
        app_state.auth_handler
            .seed_admin(username, password)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed admin account: {}", e))?;
    } else {
        tracing::warn!("No admin credentials configured; login needs an existing account");
    }

    let server_addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&server_addr)
        .with_context(|| format!("Failed to bind {}", server_addr))?;

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = run(listener, app_state, config.cors_origins(), config.worker_count)?;
    let handle = server.handle();

    tokio::select! {
        res = server => res?,
        _ = shutdown_signal() => {
            handle.stop(true).await;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}
