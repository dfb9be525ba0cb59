use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Options for `CREATE MODEL`.
///
/// # Example
///
/// ```rust
/// use mindsdb_link::TrainingOptions;
/// use serde_json::json;
///
/// let options = TrainingOptions::new()
///     .with_integration("example_db")
///     .with_select("SELECT * FROM demo_data.home_rentals")
///     .with_using("engine", json!("lightwood"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainingOptions {
    /// Integration (data source) the training data comes from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,

    /// Query selecting the training data inside `integration`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,

    /// Time-series ordering column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Time-series grouping column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,

    /// Number of past rows a time-series model looks at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<u32>,

    /// Number of future rows a time-series model predicts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<u32>,

    /// `USING` parameters, rendered in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub using: Vec<(String, JsonValue)>,
}

impl TrainingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_integration(mut self, integration: impl Into<String>) -> Self {
        self.integration = Some(integration.into());
        self
    }

    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    pub fn with_order_by(mut self, column: impl Into<String>) -> Self {
        self.order_by = Some(column.into());
        self
    }

    pub fn with_group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by = Some(column.into());
        self
    }

    pub fn with_window(mut self, window: u32) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Add a `USING key = value` parameter
    pub fn with_using(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.using.push((key.into(), value));
        self
    }
}
