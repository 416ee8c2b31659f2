use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::contact::NewContactMessage,
    errors::AppError,
    repositories::PortfolioRepository,
    use_cases::extractors::AuthPrincipal,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn submit_contact_message<R: PortfolioRepository>(
    state: web::Data<AppState<R>>,
    data: web::Json<NewContactMessage>,
) -> Result<HttpResponse, AppError> {
    let message = state.contact_handler
        .submit_contact_message(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(message))
}

#[instrument(skip(principal, state))]
pub async fn list_contact_messages<R: PortfolioRepository>(
    principal: AuthPrincipal,
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let messages = state.contact_handler.list_contact_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(principal, state))]
pub async fn mark_contact_message_read<R: PortfolioRepository>(
    principal: AuthPrincipal,
    message_id: web::Path<String>,
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let message = state.contact_handler.mark_read(&message_id).await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(principal, state))]
pub async fn delete_contact_message<R: PortfolioRepository>(
    principal: AuthPrincipal,
    message_id: web::Path<String>,
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let response = state.contact_handler.delete_contact_message(&message_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
