use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{
    entities::project::{NewProject, UpdateProject},
    errors::AppError,
    repositories::PortfolioRepository,
    use_cases::extractors::AuthPrincipal,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects<R: PortfolioRepository>(
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(principal, state, data))]
pub async fn create_project<R: PortfolioRepository>(
    principal: AuthPrincipal,
    state: web::Data<AppState<R>>,
    data: web::Json<NewProject>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let project = state.project_handler.create_project(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(principal, state, data))]
pub async fn update_project<R: PortfolioRepository>(
    principal: AuthPrincipal,
    project_id: web::Path<String>,
    state: web::Data<AppState<R>>,
    data: web::Json<UpdateProject>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let project = state.project_handler
        .update_project(&project_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(principal, state))]
pub async fn delete_project<R: PortfolioRepository>(
    principal: AuthPrincipal,
    project_id: web::Path<String>,
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, AppError> {
    state.auth_handler.authorize(&principal.0).await?;

    let response = state.project_handler.delete_project(&project_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
