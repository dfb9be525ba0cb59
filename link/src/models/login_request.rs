use serde::{Deserialize, Serialize};

/// Login request body for MindsDB Cloud
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    pub password: String,
}
