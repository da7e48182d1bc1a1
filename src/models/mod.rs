pub mod customer;
pub mod customer_account;
pub mod order;
pub mod order_products;
pub mod product;

pub use customer::Entity as Customer;
pub use customer_account::Entity as CustomerAccount;
pub use order::Entity as Order;
pub use product::Entity as Product;
