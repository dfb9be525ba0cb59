use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::query_result::QueryResult;

/// A trained (or training) MindsDB model, as listed in `<project>.models`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Model {
    pub name: String,
    pub project: String,

    /// Lifecycle status reported by the server (`generating`, `training`,
    /// `complete`, `error`)
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub accuracy: Option<f64>,

    /// Target column
    #[serde(default)]
    pub predict: Option<String>,

    #[serde(default)]
    pub version: Option<i64>,

    #[serde(default)]
    pub active: Option<bool>,
}

impl Model {
    /// Build a model from row `row_idx` of a `<project>.models` result.
    ///
    /// `project` is used when the result has no `project` column.
    pub fn from_row(result: &QueryResult, row_idx: usize, project: &str) -> Option<Self> {
        let name = as_string(result.get(row_idx, "name")?)?;
        let project = result
            .get(row_idx, "project")
            .and_then(as_string)
            .unwrap_or_else(|| project.to_string());

        Some(Self {
            name,
            project,
            status: result.get(row_idx, "status").and_then(as_string),
            accuracy: result.get(row_idx, "accuracy").and_then(as_f64),
            predict: result.get(row_idx, "predict").and_then(as_string),
            version: result.get(row_idx, "version").and_then(as_i64),
            active: result.get(row_idx, "active").and_then(as_bool),
        })
    }

    /// All models contained in a `<project>.models` result
    pub fn from_result(result: &QueryResult, project: &str) -> Vec<Self> {
        (0..result.row_count())
            .filter_map(|i| Self::from_row(result, i, project))
            .collect()
    }
}

fn as_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

// Numbers sometimes arrive as strings depending on the integration.
fn as_f64(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn as_i64(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &JsonValue) -> Option<bool> {
    match value {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::Number(n) => n.as_i64().map(|n| n != 0),
        JsonValue::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
