use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router, startup, state::AppState};


/// Full application router over an in-memory database.
struct TestApp {
    router: Router,
    db: DatabaseConnection,
}

impl TestApp {
    /// Creates the schema and loads the reference data the server seeds at startup.
    async fn seeded() -> Self {
        let test = TestBuilder::new()
            .with_travel_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.unwrap();

        startup::seed_database(&db).await.unwrap();

        let router = router::router().with_state(AppState::new(db.clone()));

        Self { router, db }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        read_json(self.request(Method::GET, uri, None).await).await
    }

    async fn post(&self, uri: &str, body: Value) -> Response {
        self.request(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> StatusCode {
        self.request(Method::PUT, uri, Some(body)).await.status()
    }

    async fn delete(&self, uri: &str) -> StatusCode {
        self.request(Method::DELETE, uri, None).await.status()
    }
}

/// Splits a response into its status and JSON body. An empty body reads as `Null`.
async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// The OpenAPI document is served alongside the API.
///
/// Expected: 200 with every resource path listed
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::seeded().await;

    let (status, body) = app.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/cities/{id}/users"));
    assert!(paths.contains_key("/api/users/signin/{email}"));
    assert!(paths.contains_key("/api/upvotes"));
}

/// Cross-origin requests are allowed from anywhere.
///
/// Expected: wildcard allow-origin header on a request carrying an Origin
#[tokio::test]
async fn allows_any_origin() {
    let app = TestApp::seeded().await;

    let request = Request::builder()
        .uri("/api/cities")
        .header(header::ORIGIN, "https://travel.example.org")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

/// Running the startup seed again leaves the data untouched.
///
/// Expected: same row counts before and after the second seed
#[tokio::test]
async fn reseeding_inserts_nothing() {
    let app = TestApp::seeded().await;

    startup::seed_database(&app.db).await.unwrap();

    assert_eq!(entity::prelude::City::find().count(&app.db).await.unwrap(), 4);
    assert_eq!(entity::prelude::Log::find().count(&app.db).await.unwrap(), 5);
    assert_eq!(
        entity::prelude::Upvote::find().count(&app.db).await.unwrap(),
        5
    );
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = TestApp::seeded().await;

    let response = app.post("/api/upvotes", json!({ "unexpected": true })).await;

    assert!(response.status().is_client_error());
    assert_eq!(
        entity::prelude::Upvote::find().count(&app.db).await.unwrap(),
        5
    );
}
