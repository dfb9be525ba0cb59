//! Main MindsDB client with builder pattern.
//!
//! Owns the SQL, Models, Projects and Tables facades and performs the
//! login that binds a session cookie to them.

use std::time::Instant;

use log::{debug, warn};
use reqwest::header::SET_COOKIE;

use crate::{
    api::{ModelsClient, ProjectsClient, SqlClient, TablesClient},
    constants::{BASE_LOGIN_URI, DEFAULT_CLOUD_DOMAIN, SESSION_COOKIE_NAME},
    error::{MindsDbError, Result},
    http::{build_reqwest_client, get_cookie_value, is_cloud_endpoint, parse_base_url, HttpClient},
    models::{ConnectionOptions, HttpVersion, LoginRequest},
    session::SessionContext,
    timeouts::MindsDbTimeouts,
};

/// Main MindsDB client.
///
/// Use [`MindsDbClient::builder`] for custom configuration, or the
/// crate-level [`connect`](crate::connect) and facade functions for the
/// process-wide default client.
///
/// # Examples
///
/// ```rust,no_run
/// use mindsdb_link::{ConnectionOptions, MindsDbClient};
///
/// # async fn example() -> mindsdb_link::Result<()> {
/// // MindsDB Cloud: connect logs in and keeps the session cookie
/// let client = MindsDbClient::new();
/// client
///     .connect(ConnectionOptions::new("me@example.com", "secret"))
///     .await?;
///
/// let projects = client.projects().get_all_projects().await?;
/// println!("{:?}", projects);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MindsDbClient {
    default_http_client: HttpClient,
    context: SessionContext,
    cloud_domains: Vec<String>,
    sql: SqlClient,
    models: ModelsClient,
    projects: ProjectsClient,
    tables: TablesClient,
}

impl MindsDbClient {
    /// Client pointed at MindsDB Cloud with default settings
    pub fn new() -> Self {
        Self::from_parts(HttpClient::cloud(), vec![DEFAULT_CLOUD_DOMAIN.to_string()])
    }

    /// Create a new builder for configuring the client
    pub fn builder() -> MindsDbClientBuilder {
        MindsDbClientBuilder::new()
    }

    fn from_parts(default_http_client: HttpClient, cloud_domains: Vec<String>) -> Self {
        let context = SessionContext::new(default_http_client.clone());
        let sql = SqlClient::new(context.clone());
        let projects = ProjectsClient::new(context.clone());
        let models = ModelsClient::new(sql.clone());
        let tables = TablesClient::new(sql.clone());

        Self {
            default_http_client,
            context,
            cloud_domains,
            sql,
            models,
            projects,
            tables,
        }
    }

    /// Bind an HTTP client to the facades and log in when needed.
    ///
    /// `options.http_client` replaces the default HTTP client for the SQL and
    /// Projects facades. When the resolved base URL is a cloud endpoint, the
    /// credentials are posted to the login route and the returned `session`
    /// cookie is attached to every following request. Self-hosted endpoints
    /// skip the login and keep the current session.
    ///
    /// # Example
    /// ```rust,no_run
    /// # async fn example() -> mindsdb_link::Result<()> {
    /// use mindsdb_link::{ConnectionOptions, HttpClient, MindsDbClient};
    ///
    /// let client = MindsDbClient::new();
    /// let local = HttpClient::new("http://127.0.0.1:47334")?;
    /// client
    ///     .connect(ConnectionOptions::default().with_http_client(local))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(&self, options: ConnectionOptions) -> Result<()> {
        let http_client = options
            .http_client
            .clone()
            .unwrap_or_else(|| self.default_http_client.clone());
        self.context.set_http_client(http_client.clone()).await;

        let base_url = http_client.base_url()?;
        if !is_cloud_endpoint(&base_url, &self.cloud_domains) {
            debug!("[CONNECT] {} is not a cloud endpoint, skipping login", base_url);
            return Ok(());
        }

        let session = self.login(&http_client, &options).await?;
        self.context.set_session(session).await;
        Ok(())
    }

    async fn login(&self, http_client: &HttpClient, options: &ConnectionOptions) -> Result<Option<String>> {
        let url = http_client.resolve(BASE_LOGIN_URI)?;
        debug!("[LOGIN] Authenticating '{}' at url={}", options.user, url);

        let login_request = LoginRequest {
            email: options.user.clone(),
            password: options.password.clone(),
        };

        let start = Instant::now();
        let response = http_client
            .inner()
            .post(url)
            .json(&login_request)
            .send()
            .await?;

        let status = response.status();
        debug!("[LOGIN] HTTP response received in {:?}, status={}", start.elapsed(), status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("[LOGIN] Login failed for '{}': {}", options.user, status);
            return Err(MindsDbError::AuthenticationError(format!(
                "Login failed ({}): {}",
                status, error_text
            )));
        }

        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            // Cookies with undecodable (obs-text) values cannot be the session
            .filter_map(|value| value.to_str().ok().map(str::to_string))
            .collect::<Vec<_>>();

        let session = get_cookie_value(&set_cookies, SESSION_COOKIE_NAME);
        if session.is_none() {
            warn!("[LOGIN] Login succeeded but no '{}' cookie was set", SESSION_COOKIE_NAME);
        } else {
            debug!("[LOGIN] Authenticated '{}' in {:?}", options.user, start.elapsed());
        }

        Ok(session)
    }

    /// SQL facade
    pub fn sql(&self) -> &SqlClient {
        &self.sql
    }

    /// Models facade (issues SQL through [`Self::sql`])
    pub fn models(&self) -> &ModelsClient {
        &self.models
    }

    /// Projects facade
    pub fn projects(&self) -> &ProjectsClient {
        &self.projects
    }

    /// Tables facade (issues SQL through [`Self::sql`])
    pub fn tables(&self) -> &TablesClient {
        &self.tables
    }

    /// Shared HTTP client and session state
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Hosts treated as cloud endpoints (exact or parent domains)
    pub fn cloud_domains(&self) -> &[String] {
        &self.cloud_domains
    }
}

impl Default for MindsDbClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring [`MindsDbClient`] instances.
pub struct MindsDbClientBuilder {
    base_url: Option<String>,
    timeouts: MindsDbTimeouts,
    http_version: HttpVersion,
    user_agent: Option<String>,
    cloud_domains: Vec<String>,
}

impl MindsDbClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeouts: MindsDbTimeouts::default(),
            http_version: HttpVersion::default(),
            user_agent: None,
            cloud_domains: vec![DEFAULT_CLOUD_DOMAIN.to_string()],
        }
    }

    /// Start from `MINDSDB_URL` when it is set
    pub fn from_env() -> Self {
        let builder = Self::new();
        match std::env::var("MINDSDB_URL") {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url),
            _ => builder,
        }
    }

    /// Set the base URL; defaults to MindsDB Cloud
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeouts(mut self, timeouts: MindsDbTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set the HTTP protocol version to use
    pub fn http_version(mut self, version: HttpVersion) -> Self {
        self.http_version = version;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Treat `domain` (and its subdomains) as a cloud endpoint that needs a
    /// login, in addition to `mindsdb.com`
    pub fn cloud_domain(mut self, domain: impl Into<String>) -> Self {
        self.cloud_domains.push(domain.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MindsDbClient> {
        let base_url = self.base_url.as_deref().map(parse_base_url).transpose()?;

        let inner = build_reqwest_client(&self.timeouts, self.http_version, self.user_agent.as_deref())?;
        let http_client = HttpClient::from_reqwest(inner, base_url);

        Ok(MindsDbClient::from_parts(http_client, self.cloud_domains))
    }
}
