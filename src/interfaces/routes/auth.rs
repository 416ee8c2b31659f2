use actix_web::web;

use crate::{handlers::auth, repositories::PortfolioRepository};

pub fn config_routes<R: PortfolioRepository>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(web::resource("/login").route(web::post().to(auth::login::<R>)))
    );
}
