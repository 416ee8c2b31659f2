use actix_web::web;

use crate::{handlers::contacts, repositories::PortfolioRepository};

pub fn config_routes<R: PortfolioRepository>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contacts")
            .service(
                web::resource("")
                    .route(web::post().to(contacts::submit_contact_message::<R>))
                    .route(web::get().to(contacts::list_contact_messages::<R>))
            )
            .service(
                web::resource("/{message_id}")
                    .route(web::delete().to(contacts::delete_contact_message::<R>))
            )
            .service(
                web::resource("/{message_id}/read")
                    .route(web::put().to(contacts::mark_contact_message_read::<R>))
            )
    );
}
