use validator::Validate;

use crate::{
    entities::{
        project::{NewProject, Project, UpdateProject},
        response::MessageResponse,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project, newest first
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Stores a new project with a server-assigned id and creation time
    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        let project = self.project_repo.insert_project(&request.prepare_for_insert()).await?;

        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    /// Applies a partial update; fields absent from the body are kept
    pub async fn update_project(&self, id: &str, request: UpdateProject) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        request.validate()?;

        let mut project = self.project_repo.find_project(&valid_id).await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        request.apply_to(&mut project);

        self.project_repo.save_project(&project).await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Deletes a project. Deleting an id that does not exist also succeeds.
    pub async fn delete_project(&self, id: &str) -> Result<MessageResponse, AppError> {
        let valid_id = valid_uuid(id)?;

        if !self.project_repo.delete_project(&valid_id).await? {
            tracing::debug!(project_id = %valid_id, "Delete of missing project");
        }

        Ok(MessageResponse::new("Project removed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::project::MockProjectRepository;
    use uuid::Uuid;

    fn new_project() -> NewProject {
        NewProject {
            title: "Task Manager App".into(),
            description: "Flutter based task management application".into(),
            tags: vec!["flutter".into()],
            category: Some("Mobile".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_identity_and_keeps_fields() {
        let mut repo = MockProjectRepository::new();
        repo.expect_insert_project()
            .times(1)
            .returning(|project| Ok(project.clone()));

        let handler = ProjectHandler::new(repo);
        let project = handler.create_project(new_project()).await.unwrap();

        assert!(!project.id.is_nil());
        assert_eq!(project.title, "Task Manager App");
        assert_eq!(project.tags, vec!["flutter".to_string()]);
        assert!(!project.featured);
    }

    #[tokio::test]
    async fn create_rejects_blank_title_without_touching_store() {
        let mut repo = MockProjectRepository::new();
        repo.expect_insert_project().never();

        let handler = ProjectHandler::new(repo);
        let mut request = new_project();
        request.title = String::new();

        let err = handler.create_project(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn update_of_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_project().returning(|_| Ok(None));
        repo.expect_save_project().never();

        let handler = ProjectHandler::new(repo);
        let err = handler
            .update_project(&Uuid::new_v4().to_string(), UpdateProject::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_rejects_malformed_id() {
        let repo = MockProjectRepository::new();
        let handler = ProjectHandler::new(repo);

        let err = handler.update_project("42", UpdateProject::default()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_saves_patched_record() {
        let existing = new_project().prepare_for_insert();
        let id = existing.id;

        let mut repo = MockProjectRepository::new();
        repo.expect_find_project()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save_project()
            .withf(|project| project.featured && project.title == "Task Manager App")
            .returning(|project| Ok(Some(project.clone())));

        let handler = ProjectHandler::new(repo);
        let patch = UpdateProject { featured: Some(true), ..Default::default() };
        let updated = handler.update_project(&id.to_string(), patch).await.unwrap();

        assert_eq!(updated.id, id);
        assert!(updated.featured);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let mut repo = MockProjectRepository::new();
        let mut removed = true;
        repo.expect_delete_project().times(2).returning(move |_| {
            let was_removed = removed;
            removed = false;
            Ok(was_removed)
        });

        let handler = ProjectHandler::new(repo);
        let id = Uuid::new_v4().to_string();

        assert_eq!(handler.delete_project(&id).await.unwrap().msg, "Project removed");
        assert_eq!(handler.delete_project(&id).await.unwrap().msg, "Project removed");
    }
}
