use serde::{Deserialize, Serialize};

/// HTTP protocol version used by the underlying `reqwest` client.
///
/// # Example
///
/// ```rust
/// use mindsdb_link::{HttpVersion, MindsDbClient};
///
/// # fn example() -> mindsdb_link::Result<()> {
/// let client = MindsDbClient::builder()
///     .base_url("http://127.0.0.1:47334")
///     .http_version(HttpVersion::Http1)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HttpVersion {
    /// HTTP/1.1 only
    #[serde(rename = "http1", alias = "http/1.1", alias = "1.1")]
    Http1,

    /// HTTP/2 with prior knowledge; the server must speak HTTP/2
    #[serde(rename = "http2", alias = "http/2", alias = "2")]
    Http2,

    /// Let the client negotiate (ALPN over TLS, HTTP/1.1 otherwise)
    #[default]
    #[serde(rename = "auto")]
    Auto,
}
