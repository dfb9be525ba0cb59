use serde::{Deserialize, Serialize};

/// A table living in an integration (data source)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub integration: String,
}
