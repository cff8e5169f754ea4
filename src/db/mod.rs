// Private module declarations
mod memory;
mod postgres;

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Backend, DatabaseConfig};
use crate::domain::customer::{Customer, CustomerId, NewCustomer};

pub use memory::InMemoryCustomerDao;
pub use postgres::PostgresCustomerDao;

// ============================================================================
// Data-Access Contract
// ============================================================================
//
// Storage-agnostic operations over customer records. Every backend implements
// the full contract identically so the service never knows which one it talks
// to.
//
// Absence is reported through Option / bool, never through an error. Errors
// returned here are infrastructure failures only (driver, pool, I/O).
//
// ============================================================================

#[async_trait]
pub trait CustomerDao: Send + Sync {
    /// All customers, ordered by id
    async fn select_all(&self) -> Result<Vec<Customer>>;

    async fn select_by_id(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Persist a new customer and return the identity storage assigned to it
    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerId>;

    /// Remove the customer with `id`; a missing id is not an error
    async fn delete_by_id(&self, id: CustomerId) -> Result<()>;

    /// Overwrite name, email and age of the customer with `customer.id`
    async fn update(&self, customer: &Customer) -> Result<()>;

    async fn exists_with_email(&self, email: &str) -> Result<bool>;

    async fn exists_with_id(&self, id: CustomerId) -> Result<bool>;
}

/// Build the data-access implementation selected by configuration
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn CustomerDao>> {
    match config.backend {
        Backend::Memory => {
            let dao = if config.seed_demo_data {
                InMemoryCustomerDao::with_demo_data()
            } else {
                InMemoryCustomerDao::new()
            };
            tracing::info!(seeded = config.seed_demo_data, "Using in-memory customer store");
            Ok(Arc::new(dao))
        }
        Backend::Postgres => {
            let url = config
                .url
                .as_deref()
                .context("The postgres backend requires a database url")?;
            let dao = PostgresCustomerDao::connect(url, config.max_connections).await?;
            tracing::info!(
                max_connections = config.max_connections,
                "Using PostgreSQL customer store"
            );
            Ok(Arc::new(dao))
        }
    }
}
