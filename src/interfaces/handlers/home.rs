use actix_web::HttpResponse;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio API is running",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
