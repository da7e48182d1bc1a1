//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::{Customer, CustomerRepository, DomainError, NewCustomer};
use crate::models::customer::{ActiveModel, Entity as CustomerEntity, Model};

/// SeaORM-based implementation of CustomerRepository
pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
        }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        let customer = CustomerEntity::find_by_id(id).one(&self.db).await?;
        Ok(customer.map(Customer::from))
    }

    async fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let model = ActiveModel {
            name: Set(customer.name),
            email: Set(customer.email),
            phone: Set(customer.phone),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            match DomainError::from(e) {
                DomainError::Conflict(_) => {
                    DomainError::Conflict("Customer with this email already exists".to_string())
                }
                other => other,
            }
        })?;

        Ok(Customer::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn repo() -> SeaOrmCustomerRepository {
        let db = db::init_db("sqlite::memory:").await.unwrap();
        SeaOrmCustomerRepository::new(db)
    }

    fn alice() -> NewCustomer {
        NewCustomer {
            name: "Alice Doe".to_string(),
            email: "alice@example.com".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_round_trips() {
        let repo = repo().await;

        let created = repo.create(alice()).await.unwrap();
        assert!(created.id > 0);

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_missing_is_none() {
        let repo = repo().await;
        assert_eq!(repo.find_by_id(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let repo = repo().await;
        repo.create(alice()).await.unwrap();

        let mut again = alice();
        again.name = "Another Alice".to_string();
        let err = repo.create(again).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");

        // The first record is untouched
        let first = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(first.name, "Alice Doe");
        assert_eq!(repo.find_by_id(2).await.unwrap(), None);
    }
}
