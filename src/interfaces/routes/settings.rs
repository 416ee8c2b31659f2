use actix_web::web;

use crate::{handlers::settings, repositories::PortfolioRepository};

pub fn config_routes<R: PortfolioRepository>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/settings")
            .route(web::get().to(settings::get_settings::<R>))
            .route(web::put().to(settings::replace_settings::<R>))
    );
}
