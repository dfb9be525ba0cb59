//! Table management in integrations, expressed as SQL.

use serde_json::Value as JsonValue;

use super::sql::{qualified, quote_identifier, SqlClient};
use crate::{error::Result, models::Table};

/// Lists, creates and drops tables inside integrations.
#[derive(Debug, Clone)]
pub struct TablesClient {
    sql: SqlClient,
}

impl TablesClient {
    pub fn new(sql: SqlClient) -> Self {
        Self { sql }
    }

    /// Names of the tables in `integration`
    pub async fn list_tables(&self, integration: &str) -> Result<Vec<String>> {
        let result = self
            .sql
            .run_query(&format!("SHOW TABLES FROM {}", quote_identifier(integration)))
            .await?;

        Ok(result
            .rows
            .iter()
            .filter_map(|row| match row.first() {
                Some(JsonValue::String(name)) => Some(name.clone()),
                _ => None,
            })
            .collect())
    }

    /// Create `integration.name` from the rows of `select`
    pub async fn create_table(&self, name: &str, integration: &str, select: &str) -> Result<Table> {
        self.sql
            .run_query(&create_table_sql(name, integration, select))
            .await?;
        Ok(Table {
            name: name.to_string(),
            integration: integration.to_string(),
        })
    }

    pub async fn delete_table(&self, name: &str, integration: &str) -> Result<()> {
        self.sql
            .run_query(&format!("DROP TABLE {}", qualified(integration, name)))
            .await?;
        Ok(())
    }
}

pub(crate) fn create_table_sql(name: &str, integration: &str, select: &str) -> String {
    format!("CREATE TABLE {} ({})", qualified(integration, name), select)
}
