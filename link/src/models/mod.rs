//! Data models for mindsdb-link.
//!
//! Request and response bodies of the MindsDB REST API, plus the typed
//! views the facades build on top of SQL results.

pub mod connection_options;
pub mod http_version;
pub mod login_request;
pub mod model;
pub mod project;
pub mod query_request;
pub mod query_response;
pub mod query_result;
pub mod table;
pub mod training_options;


pub use connection_options::ConnectionOptions;
pub use http_version::HttpVersion;
pub use login_request::LoginRequest;
pub use model::Model;
pub use project::Project;
pub use query_request::{QueryContext, QueryRequest};
pub use query_response::{QueryResponse, ResultType};
pub use query_result::QueryResult;
pub use table::Table;
pub use training_options::TrainingOptions;
