//! Resource facades of the MindsDB REST API.
//!
//! [`SqlClient`] and [`ProjectsClient`] talk HTTP through a shared
//! [`SessionContext`](crate::SessionContext). [`ModelsClient`] and
//! [`TablesClient`] build SQL statements and send them through a
//! [`SqlClient`].

pub mod models;
pub mod projects;
pub mod sql;
pub mod tables;

pub use models::ModelsClient;
pub use projects::ProjectsClient;
pub use sql::{quote_identifier, quote_literal, quote_value, SqlClient};
pub use tables::TablesClient;
