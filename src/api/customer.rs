use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ApiError;
use crate::domain::Customer;
use crate::infrastructure::AppState;
use crate::services::customer_service;

pub const CUSTOMER_CREATED: &str = "Customer created successfully";
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/customers/create",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = MessageResponse),
        (status = 409, description = "Email already registered", body = MessageResponse)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;

    let customer = customer_service::register_customer(
        state.customer_repo.as_ref(),
        payload.name,
        payload.email,
        payload.phone,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/customers/{}", customer.id))],
        Json(MessageResponse {
            message: CUSTOMER_CREATED.to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/customers/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found", body = MessageResponse)
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    customer_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    // Only integer ids name a customer
    let Ok(Path(customer_id)) = customer_id else {
        return Err(ApiError::NotFound(CUSTOMER_NOT_FOUND));
    };

    customer_service::get_customer(state.customer_repo.as_ref(), customer_id)
        .await?
        .map(|customer| Json(CustomerResponse::from(customer)))
        .ok_or(ApiError::NotFound(CUSTOMER_NOT_FOUND))
}
