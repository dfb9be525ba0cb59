//! Timeout configuration for MindsDB HTTP requests.

use std::time::Duration;

/// Timeouts applied to every request sent by an [`HttpClient`](crate::HttpClient).
///
/// # Examples
///
/// ```rust
/// use mindsdb_link::MindsDbTimeouts;
/// use std::time::Duration;
///
/// let timeouts = MindsDbTimeouts::builder()
///     .connection_timeout(Duration::from_secs(20))
///     .request_timeout_secs(300)
///     .build();
///
/// let local = MindsDbTimeouts::fast();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindsDbTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Total timeout for a single request, from send to the end of the body.
    /// SQL statements such as `CREATE MODEL` return quickly, but large
    /// `SELECT`s against integrations can take a while.
    /// Default: 60 seconds
    pub request_timeout: Duration,

    /// How long idle pooled connections are kept open.
    /// Default: 90 seconds
    pub pool_idle_timeout: Duration,
}

impl Default for MindsDbTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl MindsDbTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> MindsDbTimeoutsBuilder {
        MindsDbTimeoutsBuilder::new()
    }

    /// Short timeouts for a self-hosted instance on localhost.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(30),
        }
    }

    /// Long timeouts for slow or remote networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(300),
            pool_idle_timeout: Duration::from_secs(120),
        }
    }
}

/// Builder for custom [`MindsDbTimeouts`].
#[derive(Debug, Clone)]
pub struct MindsDbTimeoutsBuilder {
    timeouts: MindsDbTimeouts,
}

impl MindsDbTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: MindsDbTimeouts::default(),
        }
    }

    /// Set the connection timeout (TCP + TLS handshake).
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the connection timeout in seconds.
    pub fn connection_timeout_secs(self, secs: u64) -> Self {
        self.connection_timeout(Duration::from_secs(secs))
    }

    /// Set the total per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.request_timeout = timeout;
        self
    }

    /// Set the total per-request timeout in seconds.
    pub fn request_timeout_secs(self, secs: u64) -> Self {
        self.request_timeout(Duration::from_secs(secs))
    }

    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.pool_idle_timeout = timeout;
        self
    }

    /// Build the timeout configuration.
    pub fn build(self) -> MindsDbTimeouts {
        self.timeouts
    }
}
