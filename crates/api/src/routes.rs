use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, put},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/put", put(handlers::add_record).post(handlers::add_record))
        .route(
            "/del",
            delete(handlers::remove_record).post(handlers::remove_record),
        )
        .route("/records/{name}", get(handlers::get_record))
        .with_state(state)
}
