//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// A stored customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A customer that has not been persisted yet; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Repository trait for Customer entity
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError>;

    /// Persist a new customer, returning it with its assigned id.
    ///
    /// A duplicate email fails with [`DomainError::Conflict`].
    async fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
}
