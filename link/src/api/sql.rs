//! SQL execution over `POST /api/sql/query`.

use std::time::Instant;

use log::{debug, warn};
use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::{
    constants::BASE_SQL_URI,
    error::{MindsDbError, Result},
    http::HttpClient,
    models::{QueryRequest, QueryResponse, QueryResult},
    session::SessionContext,
};

/// Runs SQL statements against MindsDB.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> mindsdb_link::Result<()> {
/// use mindsdb_link::{ConnectionOptions, MindsDbClient};
///
/// let client = MindsDbClient::builder()
///     .base_url("http://127.0.0.1:47334")
///     .build()?;
/// client.connect(ConnectionOptions::default()).await?;
///
/// let result = client.sql().run_query("SHOW DATABASES").await?;
/// for row in result.rows_as_maps() {
///     println!("{:?}", row);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SqlClient {
    context: SessionContext,
}

impl SqlClient {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    /// Run `sql` in the default `mindsdb` database
    pub async fn run_query(&self, sql: &str) -> Result<QueryResult> {
        self.execute(QueryRequest::new(sql)).await
    }

    /// Run `sql` with `database` as execution context
    pub async fn run_query_in(&self, sql: &str, database: &str) -> Result<QueryResult> {
        self.execute(QueryRequest::new(sql).with_database(database))
            .await
    }

    /// Send a prepared [`QueryRequest`]
    pub async fn execute(&self, request: QueryRequest) -> Result<QueryResult> {
        debug!(
            "[SQL] Starting query: \"{}\" (len={}, db={})",
            preview(&request.query),
            request.query.len(),
            request.context.db
        );
        let start = Instant::now();

        let response = self
            .context
            .request(Method::POST, BASE_SQL_URI)
            .await?
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!(
            "[SQL] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // Error bodies usually still carry a SQL response with `error_message`
            let message = serde_json::from_str::<QueryResponse>(&error_text)
                .ok()
                .and_then(|r| r.error_message)
                .unwrap_or(error_text);

            warn!("[SQL] Server error: status={} message=\"{}\"", status, message);
            return Err(MindsDbError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: QueryResponse = response.json().await?;
        let result = body.into_result();
        match &result {
            Ok(r) => debug!(
                "[SQL] Success: type={:?} rows={} total_ms={}",
                r.result_type,
                r.row_count(),
                start.elapsed().as_millis()
            ),
            Err(e) => warn!("[SQL] {}", e),
        }
        result
    }

    /// Session token attached to requests, if logged in
    pub async fn session(&self) -> Option<String> {
        self.context.session().await
    }

    /// HTTP client currently used for requests
    pub async fn http_client(&self) -> HttpClient {
        self.context.http_client().await
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }
}

fn preview(sql: &str) -> String {
    let flat = sql.replace('\n', " ");
    if flat.chars().count() > 80 {
        format!("{}...", flat.chars().take(80).collect::<String>())
    } else {
        flat
    }
}

/// Quote an identifier with backticks, doubling embedded backticks.
///
/// ```rust
/// use mindsdb_link::quote_identifier;
///
/// assert_eq!(quote_identifier("home_rentals"), "`home_rentals`");
/// assert_eq!(quote_identifier("odd`name"), "`odd``name`");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    format!("`{}`", identifier.replace('`', "``"))
}

/// Quote a string literal with single quotes, doubling embedded quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render a JSON value as a SQL literal.
///
/// Arrays and objects are sent as quoted JSON text.
pub fn quote_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "NULL".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => quote_literal(s),
        other => quote_literal(&other.to_string()),
    }
}

/// `` `parent`.`name` ``
pub(crate) fn qualified(parent: &str, name: &str) -> String {
    format!("{}.{}", quote_identifier(parent), quote_identifier(name))
}
