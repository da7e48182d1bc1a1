//! Repository implementations using SeaORM

pub mod customer_repository;

pub use customer_repository::SeaOrmCustomerRepository;
