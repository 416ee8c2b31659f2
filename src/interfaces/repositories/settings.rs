use async_trait::async_trait;

use crate::{
    entities::site_settings::SiteSettings,
    errors::AppError,
    repositories::sqlx_repo::SqlxRepo,
};

const SETTINGS_COLUMNS: &str = "id, contact_email, github, linkedin, twitter, instagram, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The first settings record ever stored, if any.
    async fn find_settings(&self) -> Result<Option<SiteSettings>, AppError>;
    async fn insert_settings(&self, settings: &SiteSettings) -> Result<SiteSettings, AppError>;
    /// Overwrites the stored record. `None` when it no longer exists.
    async fn save_settings(&self, settings: &SiteSettings) -> Result<Option<SiteSettings>, AppError>;
}

#[async_trait]
impl SettingsRepository for SqlxRepo {
    async fn find_settings(&self) -> Result<Option<SiteSettings>, AppError> {
        let settings = sqlx::query_as::<_, SiteSettings>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM site_settings ORDER BY created_at ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn insert_settings(&self, settings: &SiteSettings) -> Result<SiteSettings, AppError> {
        let links = &settings.social_links;
        let stored = sqlx::query_as::<_, SiteSettings>(&format!(
            r#"
            INSERT INTO site_settings ({SETTINGS_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SETTINGS_COLUMNS}
            "#
        ))
        .bind(settings.id)
        .bind(&settings.contact_email)
        .bind(&links.github)
        .bind(&links.linkedin)
        .bind(&links.twitter)
        .bind(&links.instagram)
        .bind(settings.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<Option<SiteSettings>, AppError> {
        let links = &settings.social_links;
        let stored = sqlx::query_as::<_, SiteSettings>(&format!(
            r#"
            UPDATE site_settings
            SET
                contact_email = $2,
                github = $3,
                linkedin = $4,
                twitter = $5,
                instagram = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {SETTINGS_COLUMNS}
            "#
        ))
        .bind(settings.id)
        .bind(&settings.contact_email)
        .bind(&links.github)
        .bind(&links.linkedin)
        .bind(&links.twitter)
        .bind(&links.instagram)
        .bind(settings.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stored)
    }
}
