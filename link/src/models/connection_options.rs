use std::fmt;

use crate::http::HttpClient;

/// Options for [`MindsDbClient::connect`](crate::MindsDbClient::connect).
///
/// # Example
///
/// ```rust
/// use mindsdb_link::{ConnectionOptions, HttpClient};
///
/// # fn example() -> mindsdb_link::Result<()> {
/// // MindsDB Cloud account
/// let options = ConnectionOptions::new("me@example.com", "secret");
///
/// // Self-hosted instance, no login needed
/// let options = ConnectionOptions::default()
///     .with_http_client(HttpClient::new("http://127.0.0.1:47334")?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct ConnectionOptions {
    /// Login email, only used against a cloud endpoint
    pub user: String,

    pub password: String,

    /// Replaces the client's default HTTP client for the SQL and Projects facades
    pub http_client: Option<HttpClient>,
}

impl ConnectionOptions {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            http_client: None,
        }
    }

    /// Read `MINDSDB_USER` and `MINDSDB_PASSWORD`; unset variables are empty
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("MINDSDB_USER").unwrap_or_default(),
            std::env::var("MINDSDB_PASSWORD").unwrap_or_default(),
        )
    }

    pub fn with_http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }
}

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("http_client", &self.http_client)
            .finish()
    }
}
