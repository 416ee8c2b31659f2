use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::option_fields::PatchString;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Live demo URL.
    pub link: Option<String>,
    /// Source repository URL.
    pub github: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

impl NewProject {
    /// Assigns the server-side identity of the record.
    pub fn prepare_for_insert(self) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            image: self.image,
            tags: self.tags,
            link: self.link,
            github: self.github,
            category: self.category,
            featured: self.featured,
            created_at: Utc::now(),
        }
    }
}

/// Partial project body. Absent keys keep the stored value; `null` clears
/// optional ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    pub image: PatchString,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    pub link: PatchString,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    pub github: PatchString,

    #[serde(default, skip_serializing_if = "PatchString::is_unchanged")]
    pub category: PatchString,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl UpdateProject {
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(tags) = self.tags {
            project.tags = tags;
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
        self.image.apply_to(&mut project.image);
        self.link.apply_to(&mut project.link);
        self.github.apply_to(&mut project.github);
        self.category.apply_to(&mut project.category);
    }
}
