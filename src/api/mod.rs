pub mod customer;
pub mod error;
pub mod health;

use axum::{
    Json, Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

pub use error::ApiError;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route(
            "/health",
            get(health::health_check).fallback(method_not_allowed),
        )
        .route(
            "/api-docs/openapi.json",
            get(openapi_json).fallback(method_not_allowed),
        )
        // Customers
        .route(
            "/customers/create",
            post(customer::create_customer).fallback(method_not_allowed),
        )
        .route(
            "/customers/:customer_id",
            get(customer::get_customer).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
