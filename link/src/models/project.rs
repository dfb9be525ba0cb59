use serde::{Deserialize, Serialize};

/// A MindsDB project, the namespace that holds models, views and jobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
}
