//! Fixed endpoints and names used by the MindsDB REST API.

/// Base URL of the hosted MindsDB Cloud API
pub const BASE_CLOUD_API_ENDPOINT: &str = "https://cloud.mindsdb.com";

/// Login route, resolved against the base URL
pub const BASE_LOGIN_URI: &str = "/login";

/// SQL execution route
pub const BASE_SQL_URI: &str = "/api/sql/query";

/// Project listing route
pub const BASE_PROJECTS_URI: &str = "/api/projects";

/// Name of the cookie carrying the authenticated session
pub const SESSION_COOKIE_NAME: &str = "session";

/// Hosts equal to, or under, this domain require a login
pub const DEFAULT_CLOUD_DOMAIN: &str = "mindsdb.com";

/// Database used as SQL execution context when none is given
pub const DEFAULT_DATABASE: &str = "mindsdb";
