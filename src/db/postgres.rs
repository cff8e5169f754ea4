use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::CustomerDao;
use crate::domain::customer::{Customer, CustomerId, NewCustomer};

// ============================================================================
// PostgreSQL Customer Store
// ============================================================================
//
// Straight parameterized SQL against the `customer` table. The schema is
// created by the embedded migrations in ./migrations on connect.
//
// No unique constraint on email: uniqueness is the service's job.
//
// ============================================================================

pub struct PostgresCustomerDao {
    pool: PgPool,
}

impl PostgresCustomerDao {
    /// Open a pool and run pending migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Customer schema migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl CustomerDao for PostgresCustomerDao {
    async fn select_all(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, age FROM customer ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn select_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, age FROM customer WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerId> {
        let id: CustomerId = sqlx::query_scalar(
            "INSERT INTO customer (name, email, age) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&customer.name)
        .bind(customer.email.as_str())
        .bind(customer.age)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(customer_id = id, "Inserted customer row");
        Ok(id)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            customer_id = id,
            rows_affected = result.rows_affected(),
            "Deleted customer row"
        );
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        let result = sqlx::query("UPDATE customer SET name = $1, email = $2, age = $3 WHERE id = $4")
            .bind(&customer.name)
            .bind(customer.email.as_str())
            .bind(customer.age)
            .bind(customer.id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            customer_id = customer.id,
            rows_affected = result.rows_affected(),
            "Updated customer row"
        );
        Ok(())
    }

    async fn exists_with_email(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customer WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn exists_with_id(&self, id: CustomerId) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customer WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
