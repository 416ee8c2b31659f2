use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    client::{error::ClientError, session::Session},
    entities::{
        account::{LoginRequest, LoginResponse},
        contact::{ContactMessage, NewContactMessage},
        project::{NewProject, Project, UpdateProject},
        response::MessageResponse,
        site_settings::{SettingsUpdate, SiteSettings},
    },
    middlewares::auth::AUTH_HEADER,
};

/// REST transport for the `/api` surface. Owns the session token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(ApiClient {
            http: Client::new(),
            base_url,
            session: Session::LoggedOut,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = self.request(Method::POST, "auth/login", false)?.json(&body);
        let response: LoginResponse = self.execute(request).await?;

        self.session = Session::LoggedIn { token: response.token };
        tracing::debug!("Client session established");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session = Session::LoggedOut;
    }

    pub async fn list_projects(&mut self) -> Result<Vec<Project>, ClientError> {
        let request = self.request(Method::GET, "projects", false)?;
        self.execute(request).await
    }

    pub async fn create_project(&mut self, project: &NewProject) -> Result<Project, ClientError> {
        let request = self.request(Method::POST, "projects", true)?.json(project);
        self.execute(request).await
    }

    pub async fn update_project(
        &mut self,
        id: &str,
        changes: &UpdateProject,
    ) -> Result<Project, ClientError> {
        let request = self
            .request(Method::PUT, &format!("projects/{}", id), true)?
            .json(changes);
        self.execute(request).await
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::DELETE, &format!("projects/{}", id), true)?;
        self.execute(request).await
    }

    pub async fn submit_contact(
        &mut self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, ClientError> {
        let request = self.request(Method::POST, "contacts", false)?.json(message);
        self.execute(request).await
    }

    pub async fn list_messages(&mut self) -> Result<Vec<ContactMessage>, ClientError> {
        let request = self.request(Method::GET, "contacts", true)?;
        self.execute(request).await
    }

    pub async fn mark_read(&mut self, id: &str) -> Result<ContactMessage, ClientError> {
        let request = self.request(Method::PUT, &format!("contacts/{}/read", id), true)?;
        self.execute(request).await
    }

    pub async fn delete_message(&mut self, id: &str) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::DELETE, &format!("contacts/{}", id), true)?;
        self.execute(request).await
    }

    pub async fn get_settings(&mut self) -> Result<SiteSettings, ClientError> {
        let request = self.request(Method::GET, "settings", false)?;
        self.execute(request).await
    }

    pub async fn replace_settings(
        &mut self,
        settings: &SettingsUpdate,
    ) -> Result<SiteSettings, ClientError> {
        let request = self.request(Method::PUT, "settings", true)?.json(settings);
        self.execute(request).await
    }

    /// Protected requests fail here, before any network traffic, when there
    /// is no session.
    fn request(&self, method: Method, path: &str, protected: bool) -> Result<RequestBuilder, ClientError> {
        let url = self.base_url.join(path)?;
        let builder = self.http.request(method, url);

        if !protected {
            return Ok(builder);
        }

        match self.session.token() {
            Some(token) => Ok(builder.header(AUTH_HEADER, token)),
            None => Err(ClientError::NotLoggedIn),
        }
    }

    async fn execute<T: DeserializeOwned>(&mut self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let msg = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.msg)
            .unwrap_or(body);

        if status == StatusCode::UNAUTHORIZED {
            if self.session.is_logged_in() {
                tracing::info!("Session rejected by server, logging out");
            }
            self.session = Session::LoggedOut;
            return Err(ClientError::Unauthorized(msg));
        }

        Err(ClientError::Api { status: status.as_u16(), msg })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(client.base_url.join("projects").unwrap().as_str(), "http://localhost:5000/api/projects");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(ClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn protected_call_without_session_fails_locally() {
        // Port 9 is discard; nothing should be sent anyway.
        let mut client = ApiClient::new("http://127.0.0.1:9/api").unwrap();

        assert_eq!(client.list_messages().await.unwrap_err(), ClientError::NotLoggedIn);
        assert_eq!(client.delete_project("abc").await.unwrap_err(), ClientError::NotLoggedIn);
        assert!(!client.is_logged_in());
    }
}
