use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::account::LoginRequest,
    errors::AppError,
    repositories::PortfolioRepository,
    AppState,
};

#[instrument(skip(state, credentials))]
pub async fn login<R: PortfolioRepository>(
    state: web::Data<AppState<R>>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_handler.login(credentials.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
