#![allow(dead_code)]
//! In-process mock of the MindsDB REST API.
//!
//! Records every login body, SQL request and `Cookie` header so tests can
//! assert on what the client actually sent.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use mindsdb_link::{HttpClient, MindsDbClient};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Password the mock login rejects
pub const WRONG_PASSWORD: &str = "wrong";

/// Email the mock login accepts without setting a session cookie
pub const NO_COOKIE_USER: &str = "nocookie@example.com";

/// Email whose login also sets a cookie with a non-ASCII (obs-text) value
pub const OBS_TEXT_USER: &str = "obstext@example.com";

/// Everything the mock server received
#[derive(Debug, Default, Clone)]
pub struct Recorded {
    pub login_bodies: Vec<Value>,
    pub sql_bodies: Vec<Value>,
    /// `Cookie` header of each SQL / projects request, in arrival order
    pub api_cookies: Vec<Option<String>>,
}

#[derive(Clone, Default)]
struct MockState {
    recorded: Arc<Mutex<Recorded>>,
}

pub struct MockServer {
    pub base_url: String,
    state: MockState,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/login", post(login))
            .route("/api/sql/query", post(sql_query))
            .route("/api/projects", get(projects))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn recorded(&self) -> Recorded {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn login_count(&self) -> usize {
        self.recorded().login_bodies.len()
    }

    pub fn last_cookie(&self) -> Option<String> {
        self.recorded().api_cookies.last().cloned().flatten()
    }

    pub fn sql_queries(&self) -> Vec<String> {
        self.recorded()
            .sql_bodies
            .iter()
            .filter_map(|b| b["query"].as_str().map(str::to_string))
            .collect()
    }

    /// HTTP client bound to this server
    pub fn http_client(&self) -> HttpClient {
        HttpClient::new(&self.base_url).expect("mock http client")
    }

    /// Client whose default base URL is this server, treated as self-hosted
    pub fn self_hosted_client(&self) -> MindsDbClient {
        MindsDbClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("self-hosted client")
    }

    /// Client whose default base URL is this server, treated as cloud
    pub fn cloud_client(&self) -> MindsDbClient {
        MindsDbClient::builder()
            .base_url(&self.base_url)
            .cloud_domain("127.0.0.1")
            .build()
            .expect("cloud client")
    }
}

pub fn session_for(email: &str) -> String {
    format!("sess-{}", email)
}

async fn login(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.recorded.lock().unwrap().login_bodies.push(body.clone());

    if body["password"] == WRONG_PASSWORD {
        return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response();
    }

    let email = body["email"].as_str().unwrap_or_default().to_string();
    if email == NO_COOKIE_USER {
        return Json(json!({ "ok": true })).into_response();
    }

    let session_cookie = format!("session={}; Path=/; HttpOnly", session_for(&email));

    if email == OBS_TEXT_USER {
        let tracking = HeaderValue::from_bytes(b"tracking=caf\xE9; Path=/").expect("obs-text header");
        let session = HeaderValue::from_str(&session_cookie).expect("session header");
        return (
            AppendHeaders([(header::SET_COOKIE, tracking), (header::SET_COOKIE, session)]),
            Json(json!({ "ok": true })),
        )
            .into_response();
    }

    (
        AppendHeaders([
            (header::SET_COOKIE, "tracking=xyz; Path=/".to_string()),
            (header::SET_COOKIE, session_cookie),
        ]),
        Json(json!({ "ok": true })),
    )
        .into_response()
}

fn cookie_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

const MODEL_ROWS: &[(&str, &str, &str)] = &[
    ("home_rentals_model", "complete", "rental_price"),
    ("house_sales_model", "training", "ma"),
];

async fn sql_query(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.api_cookies.push(cookie_of(&headers));
        recorded.sql_bodies.push(body.clone());
    }

    let query = body["query"].as_str().unwrap_or_default();

    if query.contains("BOOM") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "type": "error", "error_message": "internal boom" })),
        )
            .into_response();
    }

    if query.contains("FAIL") {
        return Json(json!({
            "type": "error",
            "error_code": 0,
            "error_message": "Syntax error near FAIL"
        }))
        .into_response();
    }

    if query.starts_with("SELECT * FROM `mindsdb`.models") {
        let wanted = query
            .split("WHERE name = '")
            .nth(1)
            .map(|rest| rest.trim_end_matches('\''));
        let data: Vec<Value> = MODEL_ROWS
            .iter()
            .filter(|(name, _, _)| wanted.map_or(true, |w| w == *name))
            .map(|(name, status, predict)| json!([name, "mindsdb", status, predict]))
            .collect();

        return Json(json!({
            "type": "table",
            "column_names": ["NAME", "PROJECT", "STATUS", "PREDICT"],
            "data": data
        }))
        .into_response();
    }

    if query.starts_with("SHOW TABLES") {
        return Json(json!({
            "type": "table",
            "column_names": ["Tables_in_example_db"],
            "data": [["home_rentals"], ["house_sales"]]
        }))
        .into_response();
    }

    if query.starts_with("SELECT * FROM `mindsdb`.`home_rentals_model`") {
        return Json(json!({
            "type": "table",
            "column_names": ["rental_price", "sqft"],
            "data": [[4394, 823]]
        }))
        .into_response();
    }

    Json(json!({ "type": "ok", "context": { "db": body["context"]["db"] } })).into_response()
}

async fn projects(State(state): State<MockState>, headers: HeaderMap) -> Response {
    state
        .recorded
        .lock()
        .unwrap()
        .api_cookies
        .push(cookie_of(&headers));

    Json(json!([{ "name": "mindsdb" }, { "name": "sales" }])).into_response()
}
