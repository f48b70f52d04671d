#![allow(dead_code)]

use amex_mock::application::gateway::CardGateway;
use amex_mock::domain::ports::CardStoreBox;
use amex_mock::infrastructure::in_memory::InMemoryCardStore;
use amex_mock::interfaces::http::handlers::routes;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn router_with_store(store: CardStoreBox) -> Router {
    routes(Arc::new(CardGateway::new(store)))
}

pub fn in_memory_router() -> Router {
    router_with_store(Box::new(InMemoryCardStore::new()))
}

pub async fn send_raw(router: &Router, method: Method, path: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

pub async fn send(router: &Router, method: Method, path: &str, body: Value) -> (StatusCode, Value) {
    send_raw(router, method, path, Body::from(body.to_string())).await
}

pub async fn post(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, path, body).await
}
