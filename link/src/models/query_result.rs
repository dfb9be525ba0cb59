use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::query_response::ResultType;

/// Successful result of a SQL statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    pub result_type: ResultType,

    #[serde(default)]
    pub column_names: Vec<String>,

    /// Result rows as arrays of values, ordered like `column_names`
    #[serde(default)]
    pub rows: Vec<Vec<JsonValue>>,
}

impl QueryResult {
    /// Get column names
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `column`, compared case-insensitively.
    ///
    /// MindsDB reports information-schema columns in upper case
    /// (`NAME`, `STATUS`) on some versions and lower case on others.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.column_names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(column))
    }

    /// Value at (`row_idx`, `column`), with case-insensitive column lookup
    pub fn get(&self, row_idx: usize, column: &str) -> Option<&JsonValue> {
        let col = self.column_index(column)?;
        self.rows.get(row_idx)?.get(col)
    }

    /// Get a row as a HashMap by index (for convenience)
    pub fn row_as_map(&self, row_idx: usize) -> Option<HashMap<String, JsonValue>> {
        let row = self.rows.get(row_idx)?;
        let mut map = HashMap::with_capacity(self.column_names.len());
        for (i, name) in self.column_names.iter().enumerate() {
            if let Some(value) = row.get(i) {
                map.insert(name.clone(), value.clone());
            }
        }
        Some(map)
    }

    /// Get all rows as HashMaps (for convenience)
    pub fn rows_as_maps(&self) -> Vec<HashMap<String, JsonValue>> {
        (0..self.rows.len())
            .filter_map(|i| self.row_as_map(i))
            .collect()
    }
}
