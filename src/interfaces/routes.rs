use actix_web::web;

use crate::{
    handlers::{home::home, json_error::route_not_found, system::health_check},
    repositories::PortfolioRepository,
};

mod auth;
mod contacts;
mod json_error;
mod projects;
mod settings;

pub fn configure_routes<R: PortfolioRepository>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)));
    cfg.service(web::resource("/health").route(web::get().to(health_check::<R>)));

    cfg.service(
        web::scope("/api")
            .configure(auth::config_routes::<R>)
            .configure(projects::config_routes::<R>)
            .configure(contacts::config_routes::<R>)
            .configure(settings::config_routes::<R>)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::to(route_not_found));
}
