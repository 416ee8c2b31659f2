use validator::Validate;

use crate::{
    entities::site_settings::{SettingsUpdate, SiteSettings},
    errors::AppError,
    repositories::settings::SettingsRepository,
};

pub struct SettingsHandler<R>
where
    R: SettingsRepository,
{
    pub settings_repo: R,
}

impl<R> SettingsHandler<R>
where
    R: SettingsRepository,
{
    pub fn new(settings_repo: R) -> Self {
        SettingsHandler { settings_repo }
    }

    /// Returns the settings record, persisting an empty one on first read.
    pub async fn get_settings(&self) -> Result<SiteSettings, AppError> {
        if let Some(settings) = self.settings_repo.find_settings().await? {
            return Ok(settings);
        }

        let created = self.settings_repo
            .insert_settings(&SiteSettings::default_record())
            .await?;

        tracing::info!(settings_id = %created.id, "Default settings created");
        Ok(created)
    }

    /// Overwrites contact email and social links wholesale.
    pub async fn replace_settings(&self, request: SettingsUpdate) -> Result<SiteSettings, AppError> {
        request.validate()?;

        match self.settings_repo.find_settings().await? {
            Some(current) => {
                let replaced = request.replace(current);
                match self.settings_repo.save_settings(&replaced).await? {
                    Some(saved) => Ok(saved),
                    None => self.settings_repo.insert_settings(&replaced).await,
                }
            }
            None => {
                let replaced = request.replace(SiteSettings::default_record());
                self.settings_repo.insert_settings(&replaced).await
            }
        }
    }
}
