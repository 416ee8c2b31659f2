use actix_web::{http::StatusCode, HttpResponse};

use crate::entities::response::MessageResponse;

pub fn json_error(status: StatusCode, msg: &str) -> HttpResponse {
    HttpResponse::build(status).json(MessageResponse::new(msg))
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, "Route not found")
}
