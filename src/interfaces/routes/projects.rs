use actix_web::web;

use crate::{handlers::projects, repositories::PortfolioRepository};

pub fn config_routes<R: PortfolioRepository>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects::<R>))
                    .route(web::post().to(projects::create_project::<R>))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::put().to(projects::update_project::<R>))
                    .route(web::delete().to(projects::delete_project::<R>))
            )
    );
}
