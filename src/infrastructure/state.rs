//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::CustomerRepository;
use crate::infrastructure::SeaOrmCustomerRepository;

/// Application state shared across all handlers.
///
/// Built once at startup and handed to the router; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Customer repository
    pub customer_repo: Arc<dyn CustomerRepository>,
}

impl AppState {
    /// Create a new AppState backed by SeaORM repositories
    pub fn new(db: DatabaseConnection) -> Self {
        let customer_repo = Arc::new(SeaOrmCustomerRepository::new(db.clone()));
        Self { db, customer_repo }
    }

    /// Create an AppState with a custom customer repository
    pub fn with_customer_repo(
        db: DatabaseConnection,
        customer_repo: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self { db, customer_repo }
    }
}

impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
