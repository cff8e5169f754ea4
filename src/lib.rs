// ============================================================================
// Customer Service
// ============================================================================
//
// CRUD over customer records behind a thin actix-web layer.
//
// Layout:
// - domain/  - Customer entity, requests, errors and the CustomerService rules
// - db/      - CustomerDao contract with in-memory and PostgreSQL backends
// - api/     - HTTP routes and error-to-status mapping
// - config   - File and environment configuration
// - metrics  - Prometheus registry, /metrics and /health handlers
//
// ============================================================================

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod metrics;
