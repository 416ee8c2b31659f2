use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::option_fields::blank_as_none;

/// Site-wide settings. One record is expected; nothing in the schema enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub contact_email: Option<String>,
    #[sqlx(flatten)]
    #[serde(default)]
    pub social_links: SocialLinks,
    pub updated_at: DateTime<Utc>,
}

impl SiteSettings {
    /// The record created on first read: no contact email, no links.
    pub fn default_record() -> Self {
        SiteSettings {
            id: Uuid::new_v4(),
            contact_email: None,
            social_links: SocialLinks::default(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Must be a valid URL"))]
    pub github: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Must be a valid URL"))]
    pub linkedin: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Must be a valid URL"))]
    pub twitter: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Must be a valid URL"))]
    pub instagram: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.linkedin.is_none()
            && self.twitter.is_none()
            && self.instagram.is_none()
    }

    /// Configured links as `(platform, url)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("github", &self.github),
            ("linkedin", &self.linkedin),
            ("twitter", &self.twitter),
            ("instagram", &self.instagram),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.as_deref().map(|u| (name, u)))
        .collect()
    }
}

/// Full replacement body for the settings record. Links left out are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub contact_email: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub social_links: SocialLinks,
}

impl SettingsUpdate {
    /// Overwrites every editable field of `current`, stamping the update time.
    pub fn replace(self, current: SiteSettings) -> SiteSettings {
        SiteSettings {
            id: current.id,
            contact_email: self.contact_email,
            social_links: self.social_links,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        let settings = SiteSettings::default_record();

        assert!(settings.contact_email.is_none());
        assert!(settings.social_links.is_empty());
    }

    #[test]
    fn replace_does_not_merge_links() {
        let mut current = SiteSettings::default_record();
        current.social_links.github = Some("https://github.com/me".into());
        current.social_links.twitter = Some("https://twitter.com/me".into());

        let update = SettingsUpdate {
            contact_email: Some("me@example.com".into()),
            social_links: SocialLinks {
                linkedin: Some("https://linkedin.com/in/me".into()),
                ..Default::default()
            },
        };
        let replaced = update.replace(current.clone());

        assert_eq!(replaced.id, current.id);
        assert_eq!(replaced.social_links.github, None);
        assert_eq!(replaced.social_links.twitter, None);
        assert_eq!(replaced.social_links.entries(), vec![("linkedin", "https://linkedin.com/in/me")]);
        assert!(replaced.updated_at >= current.updated_at);
    }

    #[test]
    fn rejects_invalid_link() {
        let update = SettingsUpdate {
            contact_email: None,
            social_links: SocialLinks {
                github: Some("not a url".into()),
                ..Default::default()
            },
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn blank_values_clear_fields_instead_of_failing() {
        let update: SettingsUpdate = serde_json::from_str(
            r#"{"contactEmail": "", "socialLinks": {"github": " ", "linkedin": "https://linkedin.com/in/me"}}"#,
        )
        .unwrap();

        assert!(update.validate().is_ok());
        assert_eq!(update.contact_email, None);
        assert_eq!(update.social_links.github, None);
        assert_eq!(update.social_links.linkedin.as_deref(), Some("https://linkedin.com/in/me"));
    }

    #[test]
    fn deserializes_camel_case_body() {
        let update: SettingsUpdate = serde_json::from_str(
            r#"{"contactEmail": "me@example.com", "socialLinks": {"github": "https://github.com/me"}}"#,
        )
        .unwrap();

        assert_eq!(update.contact_email.as_deref(), Some("me@example.com"));
        assert_eq!(update.social_links.github.as_deref(), Some("https://github.com/me"));
    }
}
