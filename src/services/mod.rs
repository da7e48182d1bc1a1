//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Services only see repository traits, never the HTTP layer.

pub mod customer_service;

// Re-export for convenience
pub use customer_service::*;
