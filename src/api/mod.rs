// Private module declarations
mod errors;
mod handlers;

use actix_web::web;

use handlers::{delete_customer, get_customer, list_customers, register_customer, update_customer};

// ============================================================================
// HTTP Boundary
// ============================================================================
//
// Thin actix-web layer: decode JSON, call CustomerService, encode JSON.
// Domain errors become status codes through ResponseError (see errors.rs).
//
// Expects in app data:
// - web::Data<CustomerService>      (customer routes)
// - web::Data<Arc<Metrics>>         (/metrics)
// - web::Data<Backend>              (/health)
//
// ============================================================================

pub const CUSTOMERS_PATH: &str = "/api/v1/customers";

/// Register customer, health and metrics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(CUSTOMERS_PATH)
            .route("", web::get().to(list_customers))
            .route("", web::post().to(register_customer))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::put().to(update_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    )
    .route("/health", web::get().to(crate::metrics::health_handler))
    .route("/metrics", web::get().to(crate::metrics::metrics_handler));
}
