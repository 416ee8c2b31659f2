use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    constants::mark_process_start,
    middlewares::auth::{AuthGuard, AUTH_HEADER},
    repositories::PortfolioRepository,
    routes::configure_routes,
    AppState,
};

/// Builds the HTTP server on an already bound listener.
pub fn run<R: PortfolioRepository>(
    listener: TcpListener,
    state: web::Data<AppState<R>>,
    cors_origins: Vec<String>,
    workers: usize,
) -> std::io::Result<Server> {
    mark_process_start();
    let jwt_service = state.auth_handler.token_service.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(AuthGuard::new(jwt_service.clone()))
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes::<R>)
    })
    .workers(workers.max(1))
    .listen(listener)?
    .run();

    Ok(server)
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(AUTH_HEADER),
        ])
        .max_age(3600);

    if origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
