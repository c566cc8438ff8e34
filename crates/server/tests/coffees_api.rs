use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::Coffee;
use serde_json::{json, Value};
use service::errors::ServiceError;
use service::{CoffeeRepository, InMemoryCoffeeRepository};
use tower::ServiceExt;

use server::{startup, AppState};

fn empty_app() -> Router {
    let repo: Arc<dyn CoffeeRepository> = Arc::new(InMemoryCoffeeRepository::new());
    startup::build_app(AppState::new(repo))
}

async fn seeded_app() -> anyhow::Result<Router> {
    let state = startup::build_state(&configs::StorageConfig::default()).await?;
    Ok(startup::build_app(state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

#[tokio::test]
async fn seeded_list_has_four_demo_coffees() -> anyhow::Result<()> {
    let app = seeded_app().await?;
    let (status, body) = send(&app, "GET", "/coffees", None).await?;
    assert_eq!(status, StatusCode::OK);

    let list: Vec<Coffee> = serde_json::from_slice(&body)?;
    let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Cafe Cereza", "Cafe Latte", "Cafe Lareno", "Cafe Tres Pontas"]);
    Ok(())
}

#[tokio::test]
async fn create_get_delete_round() -> anyhow::Result<()> {
    let app = empty_app();

    let (status, body) = send(&app, "POST", "/coffees", Some(json!({"name": "Cafe Cereza"}))).await?;
    assert_eq!(status, StatusCode::OK);
    let created: Coffee = serde_json::from_slice(&body)?;
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Cafe Cereza");

    let uri = format!("/coffees/{}", created.id);
    let (status, body) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Coffee>(&body)?, created);

    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, Value::Null);
    Ok(())
}

#[tokio::test]
async fn post_keeps_client_supplied_id() -> anyhow::Result<()> {
    let app = empty_app();
    let (_, body) = send(&app, "POST", "/coffees", Some(json!({"id": "house", "name": "Cafe Ganador"}))).await?;
    assert_eq!(serde_json::from_slice::<Coffee>(&body)?, Coffee::with_id("house", "Cafe Ganador"));

    let (_, body) = send(&app, "GET", "/coffees/house", None).await?;
    assert_eq!(serde_json::from_slice::<Coffee>(&body)?.name, "Cafe Ganador");
    Ok(())
}

#[tokio::test]
async fn put_creates_then_updates() -> anyhow::Result<()> {
    let app = empty_app();

    let (status, body) = send(&app, "PUT", "/coffees/x", Some(json!({"name": "Latte"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"id": "", "name": "Latte"}));

    let (status, _) = send(&app, "PUT", "/coffees/x", Some(json!({"id": "x", "name": "Mocha"}))).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/coffees/x", None).await?;
    assert_eq!(serde_json::from_slice::<Coffee>(&body)?, Coffee::with_id("x", "Mocha"));

    let (_, body) = send(&app, "GET", "/coffees", None).await?;
    assert_eq!(serde_json::from_slice::<Vec<Coffee>>(&body)?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn put_echoes_mismatched_body_id() -> anyhow::Result<()> {
    let app = empty_app();
    let (status, body) = send(&app, "PUT", "/coffees/path-id", Some(json!({"id": "body-id", "name": "Cortado"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(serde_json::from_slice::<Coffee>(&body)?, Coffee::with_id("body-id", "Cortado"));

    // stored under the path id
    let (_, body) = send(&app, "GET", "/coffees/path-id", None).await?;
    assert_eq!(serde_json::from_slice::<Coffee>(&body)?, Coffee::with_id("path-id", "Cortado"));
    let (_, body) = send(&app, "GET", "/coffees/body-id", None).await?;
    assert_eq!(serde_json::from_slice::<Value>(&body)?, Value::Null);
    Ok(())
}

#[tokio::test]
async fn delete_unknown_id_is_no_content() -> anyhow::Result<()> {
    let app = seeded_app().await?;
    let (status, _) = send(&app, "DELETE", "/coffees/does-not-exist", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/coffees", None).await?;
    assert_eq!(serde_json::from_slice::<Vec<Coffee>>(&body)?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_rejected_by_extractor() -> anyhow::Result<()> {
    let app = empty_app();
    let req = Request::builder()
        .method("POST")
        .uri("/coffees")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))?;
    let resp = app.oneshot(req).await?;
    assert!(resp.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn health_and_metrics_endpoints() -> anyhow::Result<()> {
    let app = empty_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({"status": "ok"}));

    send(&app, "GET", "/coffees", None).await?;
    let (status, body) = send(&app, "GET", "/metrics", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body)?.contains("coffee_api_operations_total"));
    Ok(())
}

struct OfflineRepository;

#[async_trait]
impl CoffeeRepository for OfflineRepository {
    async fn list_all(&self) -> Result<Vec<Coffee>, ServiceError> { Err(offline()) }
    async fn get_by_id(&self, _id: &str) -> Result<Option<Coffee>, ServiceError> { Err(offline()) }
    async fn save(&self, _coffee: Coffee) -> Result<Coffee, ServiceError> { Err(offline()) }
    async fn exists_by_id(&self, _id: &str) -> Result<bool, ServiceError> { Err(offline()) }
    async fn delete_by_id(&self, _id: &str) -> Result<bool, ServiceError> { Err(offline()) }
}

fn offline() -> ServiceError {
    ServiceError::StoreUnavailable("connection refused".into())
}

#[tokio::test]
async fn store_failures_map_to_503() -> anyhow::Result<()> {
    let repo: Arc<dyn CoffeeRepository> = Arc::new(OfflineRepository);
    let app = startup::build_app(AppState::new(repo));

    for (method, uri, body) in [
        ("GET", "/coffees", None),
        ("GET", "/coffees/a", None),
        ("POST", "/coffees", Some(json!({"name": "x"}))),
        ("PUT", "/coffees/a", Some(json!({"name": "x"}))),
        ("DELETE", "/coffees/a", None),
    ] {
        let (status, bytes) = send(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{method} {uri}");
        assert_eq!(serde_json::from_slice::<Value>(&bytes)?, json!({"error": "store unavailable"}));
    }
    Ok(())
}
