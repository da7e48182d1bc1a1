use crate::api;
use crate::api::customer::{CreateCustomerRequest, CustomerResponse, MessageResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::customer::create_customer,
        api::customer::get_customer,
    ),
    components(schemas(CreateCustomerRequest, CustomerResponse, MessageResponse)),
    tags(
        (name = "storekeep", description = "Storekeep customer API")
    )
)]
pub struct ApiDoc;
