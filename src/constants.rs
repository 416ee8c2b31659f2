use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start, used for the uptime reported by `/health`.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Pins `START_TIME` to now unless it is already set. Call at startup so
/// uptime is not measured from the first health check.
pub fn mark_process_start() -> DateTime<Utc> {
    *Lazy::force(&START_TIME)
}
