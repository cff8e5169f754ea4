use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use super::CustomerDao;
use crate::domain::customer::{Customer, CustomerId, Email, NewCustomer};

// ============================================================================
// In-Memory Customer Store
// ============================================================================
//
// Map from identity to customer plus the next identity, behind one mutex.
// Each trait method takes the lock once, so individual operations are atomic
// but a check followed by a write from the service is not.
//
// ============================================================================

struct Store {
    customers: BTreeMap<CustomerId, Customer>,
    next_id: CustomerId,
}

pub struct InMemoryCustomerDao {
    store: Mutex<Store>,
}

impl InMemoryCustomerDao {
    pub fn new() -> Self {
        Self::from_customers(Vec::new())
    }

    /// Store pre-populated with two demo customers
    pub fn with_demo_data() -> Self {
        Self::from_customers(vec![
            Customer {
                id: 1,
                name: "Alex".to_string(),
                email: Email::new("alex@gmail.com"),
                age: 25,
            },
            Customer {
                id: 2,
                name: "Anakin".to_string(),
                email: Email::new("anakin@gmail.com"),
                age: 39,
            },
        ])
    }

    pub fn from_customers(customers: Vec<Customer>) -> Self {
        let next_id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let customers = customers.into_iter().map(|c| (c.id, c)).collect();

        Self {
            store: Mutex::new(Store { customers, next_id }),
        }
    }
}

impl Default for InMemoryCustomerDao {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerDao for InMemoryCustomerDao {
    async fn select_all(&self) -> Result<Vec<Customer>> {
        let store = self.store.lock().await;
        Ok(store.customers.values().cloned().collect())
    }

    async fn select_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let store = self.store.lock().await;
        Ok(store.customers.get(&id).cloned())
    }

    async fn insert(&self, customer: &NewCustomer) -> Result<CustomerId> {
        let mut store = self.store.lock().await;
        let id = store.next_id;
        store.next_id += 1;
        store.customers.insert(id, customer.clone().with_id(id));

        tracing::debug!(customer_id = id, "Inserted customer into memory store");
        Ok(id)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        let mut store = self.store.lock().await;
        let removed = store.customers.remove(&id).is_some();

        tracing::debug!(customer_id = id, removed, "Deleted customer from memory store");
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<()> {
        let mut store = self.store.lock().await;
        // Matches SQL UPDATE semantics: an unknown id changes nothing
        if let Some(existing) = store.customers.get_mut(&customer.id) {
            existing.name = customer.name.clone();
            existing.email = customer.email.clone();
            existing.age = customer.age;
            tracing::debug!(customer_id = customer.id, "Updated customer in memory store");
        }
        Ok(())
    }

    async fn exists_with_email(&self, email: &str) -> Result<bool> {
        let store = self.store.lock().await;
        Ok(store.customers.values().any(|c| c.email == *email))
    }

    async fn exists_with_id(&self, id: CustomerId) -> Result<bool> {
        let store = self.store.lock().await;
        Ok(store.customers.contains_key(&id))
    }
}
