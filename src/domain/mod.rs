// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain types and business rules, independent of HTTP and of the storage
// backend. Each domain has its own subdirectory with:
// - Value objects
// - Entity
// - Requests
// - Errors
// - Service
//
// ============================================================================

pub mod customer;
