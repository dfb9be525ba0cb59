//! Model management, expressed as SQL sent through [`SqlClient`].

use log::debug;
use serde_json::Value as JsonValue;

use super::sql::{qualified, quote_identifier, quote_literal, quote_value, SqlClient};
use crate::{
    error::{MindsDbError, Result},
    models::{Model, QueryResult, TrainingOptions},
};

/// Creates, inspects, queries and drops models.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example(client: &mindsdb_link::MindsDbClient) -> mindsdb_link::Result<()> {
/// use mindsdb_link::TrainingOptions;
///
/// let options = TrainingOptions::new()
///     .with_integration("example_db")
///     .with_select("SELECT * FROM demo_data.home_rentals");
///
/// let model = client
///     .models()
///     .train_model("home_rentals_model", "rental_price", "mindsdb", options)
///     .await?;
/// println!("{} is {:?}", model.name, model.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ModelsClient {
    sql: SqlClient,
}

impl ModelsClient {
    pub fn new(sql: SqlClient) -> Self {
        Self { sql }
    }

    /// All models in `project`
    pub async fn get_all_models(&self, project: &str) -> Result<Vec<Model>> {
        let result = self.sql.run_query(&select_models_sql(project, None)).await?;
        Ok(Model::from_result(&result, project))
    }

    /// The model called `name` in `project`, if it exists
    pub async fn get_model(&self, name: &str, project: &str) -> Result<Option<Model>> {
        let result = self
            .sql
            .run_query(&select_models_sql(project, Some(name)))
            .await?;
        Ok(Model::from_row(&result, 0, project))
    }

    /// Start training a model and return it as currently reported.
    ///
    /// Training runs on the server; the returned status is usually
    /// `generating` or `training`.
    pub async fn train_model(
        &self,
        name: &str,
        target: &str,
        project: &str,
        options: TrainingOptions,
    ) -> Result<Model> {
        let sql = create_model_sql(name, target, project, &options)?;
        debug!("[MODELS] Training {}.{} to predict {}", project, name, target);
        self.sql.run_query(&sql).await?;

        self.get_model(name, project).await?.ok_or_else(|| {
            MindsDbError::QueryError(format!(
                "model {}.{} not listed after CREATE MODEL",
                project, name
            ))
        })
    }

    /// Retrain an existing model on fresh data
    pub async fn retrain_model(&self, name: &str, project: &str) -> Result<()> {
        self.sql
            .run_query(&format!("RETRAIN {}", qualified(project, name)))
            .await?;
        Ok(())
    }

    pub async fn delete_model(&self, name: &str, project: &str) -> Result<()> {
        self.sql
            .run_query(&format!("DROP MODEL {}", qualified(project, name)))
            .await?;
        Ok(())
    }

    /// Ask the model for predictions given column = value conditions
    pub async fn query_model(
        &self,
        name: &str,
        project: &str,
        conditions: &[(&str, JsonValue)],
    ) -> Result<QueryResult> {
        self.sql
            .run_query(&query_model_sql(name, project, conditions))
            .await
    }
}

pub(crate) fn select_models_sql(project: &str, name: Option<&str>) -> String {
    let mut sql = format!("SELECT * FROM {}.models", quote_identifier(project));
    if let Some(name) = name {
        sql.push_str(&format!(" WHERE name = {}", quote_literal(name)));
    }
    sql
}

pub(crate) fn create_model_sql(
    name: &str,
    target: &str,
    project: &str,
    options: &TrainingOptions,
) -> Result<String> {
    let mut sql = format!("CREATE MODEL {}", qualified(project, name));

    match (&options.integration, &options.select) {
        (Some(integration), Some(select)) => {
            sql.push_str(&format!(" FROM {} ({})", quote_identifier(integration), select));
        },
        (None, None) => {},
        _ => {
            return Err(MindsDbError::ConfigurationError(
                "training data needs both an integration and a select query".to_string(),
            ))
        },
    }

    sql.push_str(&format!(" PREDICT {}", quote_identifier(target)));

    if let Some(order_by) = &options.order_by {
        sql.push_str(&format!(" ORDER BY {}", quote_identifier(order_by)));
    }
    if let Some(group_by) = &options.group_by {
        sql.push_str(&format!(" GROUP BY {}", quote_identifier(group_by)));
    }
    if let Some(window) = options.window {
        sql.push_str(&format!(" WINDOW {}", window));
    }
    if let Some(horizon) = options.horizon {
        sql.push_str(&format!(" HORIZON {}", horizon));
    }
    if !options.using.is_empty() {
        let mut params = Vec::with_capacity(options.using.len());
        for (key, value) in &options.using {
            if !is_using_key(key) {
                return Err(MindsDbError::ConfigurationError(format!(
                    "invalid USING parameter name '{}'",
                    key
                )));
            }
            params.push(format!("{} = {}", key, quote_value(value)));
        }
        sql.push_str(&format!(" USING {}", params.join(", ")));
    }

    Ok(sql)
}

/// `USING` keys are bare, possibly dotted names (`engine`, `model.args`)
fn is_using_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && !key.ends_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

pub(crate) fn query_model_sql(name: &str, project: &str, conditions: &[(&str, JsonValue)]) -> String {
    let mut sql = format!("SELECT * FROM {}", qualified(project, name));
    if !conditions.is_empty() {
        let clauses: Vec<String> = conditions
            .iter()
            .map(|(column, value)| format!("{} = {}", quote_identifier(column), quote_value(value)))
            .collect();
        sql.push_str(&format!(" WHERE {}", clauses.join(" AND ")));
    }
    sql
}
