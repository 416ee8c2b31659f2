use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::Project,
    errors::AppError,
    repositories::sqlx_repo::SqlxRepo,
};

const PROJECT_COLUMNS: &str =
    "id, title, description, image, tags, link, github, category, featured, created_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn insert_project(&self, project: &Project) -> Result<Project, AppError>;
    async fn find_project(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    /// Overwrites the stored record. `None` when it no longer exists.
    async fn save_project(&self, project: &Project) -> Result<Option<Project>, AppError>;
    /// Returns whether a record was removed.
    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError>;
}

#[async_trait]
impl ProjectRepository for SqlxRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn insert_project(&self, project: &Project) -> Result<Project, AppError> {
        let stored = sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects ({PROJECT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.tags)
        .bind(&project.link)
        .bind(&project.github)
        .bind(&project.category)
        .bind(project.featured)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_project(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn save_project(&self, project: &Project) -> Result<Option<Project>, AppError> {
        let stored = sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects
            SET
                title = $2,
                description = $3,
                image = $4,
                tags = $5,
                link = $6,
                github = $7,
                category = $8,
                featured = $9
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.tags)
        .bind(&project.link)
        .bind(&project.github)
        .bind(&project.category)
        .bind(project.featured)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
