//! # mindsdb-link: MindsDB Client Library
//!
//! A session-aware client for the MindsDB REST API. Log in once, keep the
//! session cookie, and reach SQL execution, models, projects and tables
//! through typed facades.
//!
//! ## Features
//!
//! - **Conditional login**: credentials are only posted to MindsDB Cloud
//!   endpoints; self-hosted instances need no login
//! - **SQL**: run statements and read rows as positional arrays or maps
//! - **Models**: train, inspect, query and drop models
//! - **Projects and Tables**: list projects, manage integration tables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mindsdb_link::ConnectionOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Logs into MindsDB Cloud with the process-wide default client
//!     mindsdb_link::connect(ConnectionOptions::new("me@example.com", "secret")).await?;
//!
//!     let result = mindsdb_link::sql().run_query("SHOW DATABASES").await?;
//!     println!("Databases: {:?}", result.rows);
//!
//!     for model in mindsdb_link::models().get_all_models("mindsdb").await? {
//!         println!("{} -> {:?}", model.name, model.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Self-hosted
//!
//! ```rust,no_run
//! use mindsdb_link::{ConnectionOptions, MindsDbClient};
//!
//! # async fn example() -> mindsdb_link::Result<()> {
//! let client = MindsDbClient::builder()
//!     .base_url("http://127.0.0.1:47334")
//!     .build()?;
//! client.connect(ConnectionOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod http;
pub mod models;
pub mod session;
pub mod timeouts;

// Re-export main types for convenience
pub use api::{quote_identifier, quote_literal, quote_value, ModelsClient, ProjectsClient, SqlClient, TablesClient};
pub use client::{MindsDbClient, MindsDbClientBuilder};
pub use error::{MindsDbError, Result};
pub use http::HttpClient;
pub use models::{
    ConnectionOptions, HttpVersion, Model, Project, QueryRequest, QueryResponse, QueryResult, Table,
    TrainingOptions,
};
pub use session::SessionContext;
pub use timeouts::MindsDbTimeouts;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static DEFAULT_CLIENT: OnceLock<MindsDbClient> = OnceLock::new();

/// Process-wide client behind [`connect`], [`sql`], [`models`],
/// [`projects`] and [`tables`]. Created on first use, pointed at MindsDB Cloud.
pub fn default_client() -> &'static MindsDbClient {
    DEFAULT_CLIENT.get_or_init(MindsDbClient::new)
}

/// [`MindsDbClient::connect`] on the default client
pub async fn connect(options: ConnectionOptions) -> Result<()> {
    default_client().connect(options).await
}

/// SQL facade of the default client
pub fn sql() -> &'static SqlClient {
    default_client().sql()
}

/// Models facade of the default client
pub fn models() -> &'static ModelsClient {
    default_client().models()
}

/// Projects facade of the default client
pub fn projects() -> &'static ProjectsClient {
    default_client().projects()
}

/// Tables facade of the default client
pub fn tables() -> &'static TablesClient {
    default_client().tables()
}
