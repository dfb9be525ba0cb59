//! HTTP client handle and URL/cookie helpers.
//!
//! [`HttpClient`] pairs a `reqwest::Client` with an optional base URL, the
//! way an HTTP client instance carries its default base URL. Requests are
//! resolved against that base, or against MindsDB Cloud when none is set.

use std::fmt;

use reqwest::Url;

use crate::{
    constants::BASE_CLOUD_API_ENDPOINT,
    error::{MindsDbError, Result},
    models::HttpVersion,
    timeouts::MindsDbTimeouts,
};

/// A cheap-to-clone HTTP client bound to an optional base URL.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpClient {
    /// HTTP client for `base_url` with default timeouts
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeouts(base_url, &MindsDbTimeouts::default())
    }

    /// HTTP client for `base_url` with custom timeouts
    pub fn with_timeouts(base_url: &str, timeouts: &MindsDbTimeouts) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let inner = build_reqwest_client(timeouts, HttpVersion::default(), None)?;
        Ok(Self::from_reqwest(inner, Some(base_url)))
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// With `base_url` set to `None` requests go to MindsDB Cloud.
    pub fn from_reqwest(inner: reqwest::Client, base_url: Option<Url>) -> Self {
        Self { inner, base_url }
    }

    /// HTTP client without an explicit base URL (MindsDB Cloud)
    pub fn cloud() -> Self {
        let inner = build_reqwest_client(&MindsDbTimeouts::default(), HttpVersion::default(), None)
            .unwrap_or_else(|e| {
                log::warn!("[HTTP] Falling back to default reqwest client: {}", e);
                reqwest::Client::new()
            });
        Self::from_reqwest(inner, None)
    }

    /// The base URL set on this client, if any
    pub fn configured_base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// The base URL requests are resolved against
    pub fn base_url(&self) -> Result<Url> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => parse_base_url(BASE_CLOUD_API_ENDPOINT),
        }
    }

    /// Join an API path onto the base URL.
    ///
    /// Absolute paths such as `/api/sql/query` replace the base URL's path.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url()?
            .join(path)
            .map_err(|e| MindsDbError::ConfigurationError(format!("invalid URL path '{}': {}", path, e)))
    }

    /// The wrapped `reqwest::Client`
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::cloud()
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish()
    }
}

pub(crate) fn parse_base_url(url: &str) -> Result<Url> {
    Url::parse(url.trim())
        .map_err(|e| MindsDbError::ConfigurationError(format!("invalid base URL '{}': {}", url, e)))
}

pub(crate) fn build_reqwest_client(
    timeouts: &MindsDbTimeouts,
    http_version: HttpVersion,
    user_agent: Option<&str>,
) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(timeouts.request_timeout)
        .connect_timeout(timeouts.connection_timeout)
        .pool_idle_timeout(timeouts.pool_idle_timeout);

    builder = match http_version {
        HttpVersion::Http1 => {
            log::debug!("[HTTP] Using HTTP/1.1 only");
            builder.http1_only()
        },
        HttpVersion::Http2 => {
            log::debug!("[HTTP] Using HTTP/2 with prior knowledge");
            builder.http2_prior_knowledge()
        },
        HttpVersion::Auto => builder,
    };

    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent.to_string());
    }

    builder
        .build()
        .map_err(|e| MindsDbError::ConfigurationError(e.to_string()))
}

/// Whether `url` points at a cloud deployment that requires a login.
///
/// True when the host equals one of `cloud_domains` or is a subdomain of one
/// (`cloud.mindsdb.com` matches `mindsdb.com`; `notmindsdb.com` does not).
pub fn is_cloud_endpoint(url: &Url, cloud_domains: &[String]) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    cloud_domains.iter().any(|domain| {
        let domain = domain.trim_end_matches('.').to_ascii_lowercase();
        !domain.is_empty()
            && (host == domain
                || host
                    .strip_suffix(domain.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.')))
    })
}

/// Value of the cookie `name` among a list of `Set-Cookie` header values.
///
/// Each header may carry a single cookie with attributes
/// (`session=abc; Path=/; HttpOnly`). When several headers set the same
/// cookie, the last one wins. An empty value (a deletion such as
/// `session=; Max-Age=0`) counts as no cookie.
pub fn get_cookie_value<S: AsRef<str>>(set_cookie_headers: &[S], name: &str) -> Option<String> {
    let mut found = None;
    for header in set_cookie_headers {
        for pair in header.as_ref().split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if key.trim() == name {
                let value = value.trim().trim_matches('"');
                found = (!value.is_empty()).then(|| value.to_string());
            }
        }
    }
    found
}
