pub mod account;
pub mod contact;
pub mod project;
pub mod settings;
pub mod sqlx_repo;
pub mod token;

use account::AccountRepository;
use contact::ContactRepository;
use project::ProjectRepository;
use settings::SettingsRepository;

/// Everything the HTTP layer needs from a store.
pub trait PortfolioRepository:
    AccountRepository + ProjectRepository + ContactRepository + SettingsRepository + Clone + 'static
{
}

impl<T> PortfolioRepository for T where
    T: AccountRepository + ProjectRepository + ContactRepository + SettingsRepository + Clone + 'static
{
}
