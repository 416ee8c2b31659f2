use actix_web::{web, HttpResponse};
use chrono::Utc;
use humantime::format_duration;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::{
    sync::{atomic::{AtomicI64, Ordering}, RwLock},
    time::Duration,
};

use crate::{
    constants::START_TIME,
    repositories::PortfolioRepository,
    AppState,
};

#[derive(Serialize, Clone, Default)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    version: String,
}

static LAST_CHECK: AtomicI64 = AtomicI64::new(0);
static CACHED_STATUS: Lazy<RwLock<HealthCheckResponse>> = Lazy::new(||
    RwLock::new(HealthCheckResponse::default())
);

async fn build_health_response<R: PortfolioRepository>(state: &AppState<R>) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let (status, database) = match state.auth_handler.account_repo.check_connection().await {
        Ok(_) => ("healthy", "OK"),
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            ("degraded", "Unavailable")
        }
    };

    HealthCheckResponse {
        status: status.to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Liveness probe. Results are cached for a few seconds so the endpoint
/// cannot be used to hammer the database.
pub async fn health_check<R: PortfolioRepository>(state: web::Data<AppState<R>>) -> HttpResponse {
    let now = Utc::now().timestamp();
    let last = LAST_CHECK.load(Ordering::Relaxed);

    if now - last > 5 {
        let response = build_health_response(&state).await;

        if let Ok(mut cache) = CACHED_STATUS.write() {
            *cache = response.clone();
            LAST_CHECK.store(now, Ordering::Relaxed);
        }

        HttpResponse::Ok().json(response)
    } else {
        match CACHED_STATUS.read() {
            Ok(response) => HttpResponse::Ok().json(response.clone()),
            Err(e) => {
                tracing::warn!("HealthCheck cache lock poisoned: {}", e);
                HttpResponse::Ok().json(build_health_response(&state).await)
            }
        }
    }
}
