#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use mockapetris_api::{create_api_routes, AppState};
use mockapetris_application::ports::RecordStore;
use mockapetris_application::use_cases::{
    DeleteRecordUseCase, GetRecordUseCase, SetRecordUseCase,
};
use mockapetris_domain::DomainError;
use std::sync::Arc;
use tower::ServiceExt;

pub fn create_test_app(store: Arc<dyn RecordStore>) -> Router {
    let state = AppState {
        set_record: Arc::new(SetRecordUseCase::new(store.clone())),
        delete_record: Arc::new(DeleteRecordUseCase::new(store.clone())),
        get_record: Arc::new(GetRecordUseCase::new(store)),
    };
    create_api_routes(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Store whose every call fails, as an unreachable backend would.
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn get(&self, _name: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn set(&self, _name: &str, _address: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }

    async fn delete(&self, _name: &str) -> Result<bool, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".into()))
    }
}
