use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DATABASE;

/// Request payload for `POST /api/sql/query`.
///
/// # Examples
///
/// ```rust
/// use mindsdb_link::QueryRequest;
///
/// let request = QueryRequest::new("SHOW DATABASES");
/// assert_eq!(request.context.db, "mindsdb");
///
/// let request = QueryRequest::new("SELECT * FROM orders").with_database("sales");
/// assert_eq!(request.context.db, "sales");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    /// SQL text sent verbatim
    pub query: String,

    pub context: QueryContext,
}

/// Execution context of a SQL statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryContext {
    /// Database that unqualified names resolve against
    pub db: String,
}

impl Default for QueryContext {
    fn default() -> Self {
        Self {
            db: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: QueryContext::default(),
        }
    }

    /// Run the statement against `database` instead of the default one
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.context.db = database.into();
        self
    }
}
