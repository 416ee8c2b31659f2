use crate::{
    client::{api::ApiClient, error::ClientError},
    entities::{
        contact::{ContactMessage, NewContactMessage},
        project::{NewProject, Project, UpdateProject},
        site_settings::{SettingsUpdate, SiteSettings},
    },
};

/// Local copy of server state. Only ever replaced by a fresh fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientStore {
    pub projects: Vec<Project>,
    pub messages: Vec<ContactMessage>,
    pub settings: Option<SiteSettings>,
}

/// User-facing feedback. The dashboard raises alerts, the public site toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    Toast { success: bool, text: String },
}

/// Admin view. Every successful write reloads the affected list; a failed
/// write leaves the store as it was and raises an alert.
pub struct Dashboard {
    api: ApiClient,
    store: ClientStore,
    notices: Vec<Notice>,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Dashboard {
            api,
            store: ClientStore::default(),
            notices: Vec::new(),
        }
    }

    pub fn store(&self) -> &ClientStore {
        &self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.is_logged_in()
    }

    /// Drains pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let result = self.api.login(username, password).await;
        self.check(result)?;
        self.load_all().await
    }

    pub fn logout(&mut self) {
        self.api.logout();
        self.store = ClientStore::default();
    }

    pub async fn load_all(&mut self) -> Result<(), ClientError> {
        self.reload_projects().await?;
        self.reload_messages().await?;
        self.reload_settings().await
    }

    pub async fn create_project(&mut self, project: &NewProject) -> Result<(), ClientError> {
        let result = self.api.create_project(project).await;
        self.check(result)?;
        self.reload_projects().await
    }

    pub async fn update_project(&mut self, id: &str, changes: &UpdateProject) -> Result<(), ClientError> {
        let result = self.api.update_project(id, changes).await;
        self.check(result)?;
        self.reload_projects().await
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<(), ClientError> {
        let result = self.api.delete_project(id).await;
        self.check(result)?;
        self.reload_projects().await
    }

    pub async fn mark_read(&mut self, id: &str) -> Result<(), ClientError> {
        let result = self.api.mark_read(id).await;
        self.check(result)?;
        self.reload_messages().await
    }

    pub async fn delete_message(&mut self, id: &str) -> Result<(), ClientError> {
        let result = self.api.delete_message(id).await;
        self.check(result)?;
        self.reload_messages().await
    }

    pub async fn save_settings(&mut self, settings: &SettingsUpdate) -> Result<(), ClientError> {
        let result = self.api.replace_settings(settings).await;
        self.check(result)?;
        self.reload_settings().await
    }

    async fn reload_projects(&mut self) -> Result<(), ClientError> {
        let result = self.api.list_projects().await;
        self.store.projects = self.check(result)?;
        Ok(())
    }

    async fn reload_messages(&mut self) -> Result<(), ClientError> {
        let result = self.api.list_messages().await;
        self.store.messages = self.check(result)?;
        Ok(())
    }

    async fn reload_settings(&mut self) -> Result<(), ClientError> {
        let result = self.api.get_settings().await;
        self.store.settings = Some(self.check(result)?);
        Ok(())
    }

    fn check<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        result.inspect_err(|e| {
            tracing::warn!("Dashboard request failed: {}", e);
            self.notices.push(Notice::Alert(e.to_string()));
        })
    }
}

/// Visitor view: reads without a session and submits contact messages.
pub struct PublicSite {
    api: ApiClient,
    store: ClientStore,
    notices: Vec<Notice>,
}

impl PublicSite {
    pub fn new(api: ApiClient) -> Self {
        PublicSite {
            api,
            store: ClientStore::default(),
            notices: Vec::new(),
        }
    }

    pub fn store(&self) -> &ClientStore {
        &self.store
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        let result = self.api.list_projects().await;
        self.store.projects = self.check(result)?;
        let result = self.api.get_settings().await;
        self.store.settings = Some(self.check(result)?);
        Ok(())
    }

    pub async fn submit_contact(&mut self, message: &NewContactMessage) -> Result<(), ClientError> {
        match self.api.submit_contact(message).await {
            Ok(_) => {
                self.notices.push(Notice::Toast {
                    success: true,
                    text: "Message sent successfully! I will get back to you soon.".to_string(),
                });
                Ok(())
            }
            Err(e) => {
                self.notices.push(Notice::Toast {
                    success: false,
                    text: format!("Failed to send message: {}", e),
                });
                Err(e)
            }
        }
    }

    fn check<T>(&mut self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        result.inspect_err(|e| {
            tracing::warn!("Public site request failed: {}", e);
            self.notices.push(Notice::Toast {
                success: false,
                text: format!("Failed to load content: {}", e),
            });
        })
    }
}
