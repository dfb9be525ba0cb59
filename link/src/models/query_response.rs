use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::query_result::QueryResult;
use crate::error::{MindsDbError, Result};

/// Kind of answer returned for a SQL statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// Rows with column names
    Table,
    /// Statement executed, nothing to return
    #[default]
    Ok,
    Error,
}

/// Raw body of a `POST /api/sql/query` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "type", default)]
    pub result_type: ResultType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_names: Option<Vec<String>>,

    /// Rows as positional arrays, aligned with `column_names`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<JsonValue>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Context echoed back by the server (current database, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonValue>,
}

impl QueryResponse {
    /// Turn the raw response into a [`QueryResult`], failing on `type: error`.
    pub fn into_result(self) -> Result<QueryResult> {
        if self.result_type == ResultType::Error {
            let message = self
                .error_message
                .unwrap_or_else(|| "Unknown SQL error".to_string());
            return Err(MindsDbError::QueryError(message));
        }

        Ok(QueryResult {
            result_type: self.result_type,
            column_names: self.column_names.unwrap_or_default(),
            rows: self.data.unwrap_or_default(),
        })
    }
}
