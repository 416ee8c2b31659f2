use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::site_settings::SettingsUpdate,
    errors::AppError,
    repositories::PortfolioRepository,
    use_cases::extractors::AuthPrincipal,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_settings<R: PortfolioRepository>(
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, AppError> {
    let settings = state.settings_handler.get_settings().await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(principal, state, data))]
pub async fn replace_settings<R: PortfolioRepository>(
    principal: AuthPrincipal,
    state: web::Data<AppState<R>>,
    data: web::Json<SettingsUpdate>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let settings = state.settings_handler.replace_settings(data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}
