//! Project listing over `GET /api/projects`.

use log::{debug, warn};
use reqwest::Method;

use crate::{
    constants::BASE_PROJECTS_URI,
    error::{MindsDbError, Result},
    http::HttpClient,
    models::Project,
    session::SessionContext,
};

/// Lists MindsDB projects.
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    context: SessionContext,
}

impl ProjectsClient {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    /// All projects visible to the current session
    pub async fn get_all_projects(&self) -> Result<Vec<Project>> {
        debug!("[PROJECTS] Fetching project list");

        let response = self
            .context
            .request(Method::GET, BASE_PROJECTS_URI)
            .await?
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("[PROJECTS] Server error: status={} message=\"{}\"", status, message);
            return Err(MindsDbError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let projects: Vec<Project> = response.json().await?;
        debug!("[PROJECTS] Received {} projects", projects.len());
        Ok(projects)
    }

    /// The project called `name`, if it exists
    pub async fn get_project(&self, name: &str) -> Result<Option<Project>> {
        let projects = self.get_all_projects().await?;
        Ok(projects.into_iter().find(|p| p.name == name))
    }

    /// Session token attached to requests, if logged in
    pub async fn session(&self) -> Option<String> {
        self.context.session().await
    }

    /// HTTP client currently used for requests
    pub async fn http_client(&self) -> HttpClient {
        self.context.http_client().await
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }
}
