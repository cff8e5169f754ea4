// ============================================================================
// Customer Domain - Business Logic for Customer Records
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Email, CustomerId)
// - Entity (Customer, NewCustomer)
// - Requests (CustomerRegistrationRequest, CustomerEditRequest)
// - Errors (CustomerError enum)
// - Service (CustomerService with the business rules)
//
// Persistence lives behind the CustomerDao trait in crate::db.
//
// ============================================================================

pub mod value_objects;
pub mod model;
pub mod commands;
pub mod errors;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use model::*;
pub use commands::*;
pub use errors::*;
pub use service::*;
