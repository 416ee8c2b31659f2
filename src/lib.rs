mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod startup;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, utils};

use auth::jwt::JwtService;
use repositories::{sqlx_repo::SqlxRepo, PortfolioRepository};
use use_cases::{
    auth::AuthHandler,
    contacts::ContactHandler,
    projects::ProjectHandler,
    settings::SettingsHandler,
};

/// Shared per-worker state. Every handler works through the same store `R`.
pub struct AppState<R: PortfolioRepository = SqlxRepo> {
    pub auth_handler: AuthHandler<R, JwtService>,
    pub project_handler: ProjectHandler<R>,
    pub contact_handler: ContactHandler<R>,
    pub settings_handler: SettingsHandler<R>,
}

impl<R: PortfolioRepository> AppState<R> {
    pub fn new(repo: R, jwt_service: JwtService) -> Self {
        AppState {
            auth_handler: AuthHandler::new(repo.clone(), jwt_service),
            project_handler: ProjectHandler::new(repo.clone()),
            contact_handler: ContactHandler::new(repo.clone()),
            settings_handler: SettingsHandler::new(repo),
        }
    }
}

impl AppState<SqlxRepo> {
    pub fn from_pool(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        AppState::new(SqlxRepo::new(pool), JwtService::new(config))
    }
}
