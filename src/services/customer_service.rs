//! Customer Service - Pure business logic without HTTP layer

use crate::domain::{Customer, CustomerRepository, DomainError, NewCustomer};

pub const NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 120;
pub const PHONE_MAX_LEN: usize = 20;

/// Build a customer that has not been stored yet.
///
/// No validation and no side effects; the store assigns the id on insert and
/// enforces email uniqueness.
pub fn create_customer(name: String, email: String, phone: String) -> NewCustomer {
    NewCustomer { name, email, phone }
}

/// Get a single customer by ID. `Ok(None)` means no such customer.
pub async fn get_customer(
    repo: &dyn CustomerRepository,
    customer_id: i32,
) -> Result<Option<Customer>, DomainError> {
    repo.find_by_id(customer_id).await
}

/// Validate, build and persist a new customer
pub async fn register_customer(
    repo: &dyn CustomerRepository,
    name: String,
    email: String,
    phone: String,
) -> Result<Customer, DomainError> {
    validate_new_customer(&name, &email, &phone)?;

    let customer = repo.create(create_customer(name, email, phone)).await?;
    tracing::info!("Created customer {}", customer.id);

    Ok(customer)
}

/// Check required fields and column limits for a new customer.
///
/// Email is any non-empty string; its shape is not checked.
pub fn validate_new_customer(name: &str, email: &str, phone: &str) -> Result<(), DomainError> {
    require_text("name", name, NAME_MAX_LEN)?;
    require_text("phone", phone, PHONE_MAX_LEN)?;
    require_text("email", email, EMAIL_MAX_LEN)
}

fn require_text(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
