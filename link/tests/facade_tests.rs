//! Tests for the SQL, Models, Projects and Tables facades against the mock API.

mod common;

use common::MockServer;
use mindsdb_link::{ConnectionOptions, MindsDbClient, MindsDbError, TrainingOptions};
use serde_json::json;

async fn connected(server: &MockServer) -> MindsDbClient {
    let client = server.self_hosted_client();
    client.connect(ConnectionOptions::default()).await.unwrap();
    client
}

// ==================== SQL ====================

#[tokio::test]
async fn test_run_query_sends_default_context() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    client.sql().run_query("SHOW DATABASES").await.unwrap();
    client.sql().run_query_in("SELECT 1", "files").await.unwrap();

    let bodies = server.recorded().sql_bodies;
    assert_eq!(
        bodies[0],
        json!({ "query": "SHOW DATABASES", "context": { "db": "mindsdb" } })
    );
    assert_eq!(bodies[1]["context"]["db"], "files");
}

#[tokio::test]
async fn test_sql_error_result_is_query_error() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let err = client.sql().run_query("SELECT FAIL").await.unwrap_err();
    match err {
        MindsDbError::QueryError(message) => assert_eq!(message, "Syntax error near FAIL"),
        other => panic!("Expected QueryError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sql_http_error_is_server_error() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let err = client.sql().run_query("SELECT BOOM").await.unwrap_err();
    match err {
        MindsDbError::ServerError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(message, "internal boom");
        },
        other => panic!("Expected ServerError, got {:?}", other),
    }
}

// ==================== Projects ====================

#[tokio::test]
async fn test_projects_listing() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let projects = client.projects().get_all_projects().await.unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["mindsdb", "sales"]);

    assert!(client.projects().get_project("sales").await.unwrap().is_some());
    assert!(client.projects().get_project("nope").await.unwrap().is_none());
}

// ==================== Models ====================

#[tokio::test]
async fn test_get_all_models() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let models = client.models().get_all_models("mindsdb").await.unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "home_rentals_model");
    assert_eq!(models[0].status.as_deref(), Some("complete"));
    assert_eq!(models[1].predict.as_deref(), Some("ma"));
}

#[tokio::test]
async fn test_get_model_by_name() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let model = client
        .models()
        .get_model("house_sales_model", "mindsdb")
        .await
        .unwrap()
        .expect("model should exist");
    assert_eq!(model.status.as_deref(), Some("training"));

    let missing = client.models().get_model("missing", "mindsdb").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_train_model_creates_then_fetches() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let options = TrainingOptions::new()
        .with_integration("example_db")
        .with_select("SELECT * FROM demo_data.home_rentals");
    let model = client
        .models()
        .train_model("home_rentals_model", "rental_price", "mindsdb", options)
        .await
        .unwrap();

    assert_eq!(model.name, "home_rentals_model");
    assert_eq!(
        server.sql_queries(),
        vec![
            "CREATE MODEL `mindsdb`.`home_rentals_model` FROM `example_db` \
             (SELECT * FROM demo_data.home_rentals) PREDICT `rental_price`"
                .to_string(),
            "SELECT * FROM `mindsdb`.models WHERE name = 'home_rentals_model'".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_train_model_not_listed_is_error() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let err = client
        .models()
        .train_model("missing", "y", "mindsdb", TrainingOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MindsDbError::QueryError(_)));
}

#[tokio::test]
async fn test_query_retrain_and_delete_model() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let result = client
        .models()
        .query_model("home_rentals_model", "mindsdb", &[("sqft", json!(823))])
        .await
        .unwrap();
    assert_eq!(result.get(0, "rental_price"), Some(&json!(4394)));

    client.models().retrain_model("home_rentals_model", "mindsdb").await.unwrap();
    client.models().delete_model("home_rentals_model", "mindsdb").await.unwrap();

    let queries = server.sql_queries();
    assert_eq!(queries[1], "RETRAIN `mindsdb`.`home_rentals_model`");
    assert_eq!(queries[2], "DROP MODEL `mindsdb`.`home_rentals_model`");
}

// ==================== Tables ====================

#[tokio::test]
async fn test_tables_lifecycle() {
    let server = MockServer::start().await;
    let client = connected(&server).await;

    let tables = client.tables().list_tables("example_db").await.unwrap();
    assert_eq!(tables, vec!["home_rentals".to_string(), "house_sales".to_string()]);

    let table = client
        .tables()
        .create_table("rentals_copy", "example_db", "SELECT * FROM demo_data.home_rentals")
        .await
        .unwrap();
    assert_eq!(table.integration, "example_db");

    client.tables().delete_table("rentals_copy", "example_db").await.unwrap();

    assert_eq!(
        server.sql_queries(),
        vec![
            "SHOW TABLES FROM `example_db`".to_string(),
            "CREATE TABLE `example_db`.`rentals_copy` (SELECT * FROM demo_data.home_rentals)"
                .to_string(),
            "DROP TABLE `example_db`.`rentals_copy`".to_string(),
        ]
    );
}
