//! Shared session state for the SQL and Projects facades.

use std::sync::Arc;

use reqwest::{header::COOKIE, Method, RequestBuilder};
use tokio::sync::RwLock;

use crate::{
    constants::SESSION_COOKIE_NAME,
    error::Result,
    http::HttpClient,
};

#[derive(Debug, Default)]
struct SessionState {
    http_client: HttpClient,
    session: Option<String>,
}

/// Active HTTP client and session token, shared between facades.
///
/// Cloning is cheap; all clones observe the same state, so a single
/// `connect` updates every facade built on the same context.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    pub fn new(http_client: HttpClient) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                http_client,
                session: None,
            })),
        }
    }

    pub async fn http_client(&self) -> HttpClient {
        self.state.read().await.http_client.clone()
    }

    pub async fn set_http_client(&self, http_client: HttpClient) {
        self.state.write().await.http_client = http_client;
    }

    /// Current session token
    pub async fn session(&self) -> Option<String> {
        self.state.read().await.session.clone()
    }

    /// Replace the session token; `None` clears it
    pub async fn set_session(&self, session: Option<String>) {
        self.state.write().await.session = session;
    }

    /// Build a request to `path` carrying the session cookie, if any.
    pub(crate) async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let (http_client, session) = {
            let state = self.state.read().await;
            (state.http_client.clone(), state.session.clone())
        };

        let url = http_client.resolve(path)?;
        let mut builder = http_client.inner().request(method, url);
        if let Some(token) = session {
            builder = builder.header(COOKIE, format!("{}={}", SESSION_COOKIE_NAME, token));
        }
        Ok(builder)
    }
}
