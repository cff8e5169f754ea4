use std::sync::Arc;
use std::time::Instant;

use crate::db::CustomerDao;
use crate::metrics::Metrics;

use super::commands::{CustomerEditRequest, CustomerRegistrationRequest};
use super::errors::CustomerError;
use super::model::Customer;
use super::value_objects::CustomerId;

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: Request → Validation → Existence checks → CustomerDao
//
// Stateless. Every operation is a check followed by a write with nothing
// holding the two together, so two concurrent registrations with the same
// email can both pass the check.
//
// ============================================================================

pub struct CustomerService {
    dao: Arc<dyn CustomerDao>,
    metrics: Option<Arc<Metrics>>,
}

impl CustomerService {
    pub fn new(dao: Arc<dyn CustomerDao>) -> Self {
        Self { dao, metrics: None }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        let started = Instant::now();
        let result = self.dao.select_all().await.map_err(CustomerError::from);
        self.record("list_all", &result, started);
        result
    }

    pub async fn get(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        let started = Instant::now();
        let result = self.find(id).await;
        self.record("get", &result, started);
        result
    }

    /// Register a new customer, rejecting emails that are already taken
    pub async fn register(
        &self,
        request: CustomerRegistrationRequest,
    ) -> Result<Customer, CustomerError> {
        let started = Instant::now();
        let result = self.register_inner(request).await;
        self.record("register", &result, started);
        result
    }

    /// Delete a customer; fails with `NotFound` if the id is unknown
    pub async fn remove_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        let started = Instant::now();
        let result = self.remove_inner(id).await;
        self.record("remove", &result, started);
        result
    }

    /// Apply a partial edit
    ///
    /// A field changes only when the request supplies it and the value differs
    /// from the stored one. An edit with no effective change is rejected with
    /// `NoChanges`. The duplicate-email check runs only when the email itself
    /// changes.
    pub async fn apply_edit(
        &self,
        id: CustomerId,
        request: CustomerEditRequest,
    ) -> Result<Customer, CustomerError> {
        let started = Instant::now();
        let result = self.apply_edit_inner(id, request).await;
        self.record("edit", &result, started);
        result
    }

    async fn find(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.dao
            .select_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    async fn register_inner(
        &self,
        request: CustomerRegistrationRequest,
    ) -> Result<Customer, CustomerError> {
        request.validate()?;

        if self.dao.exists_with_email(request.email.as_str()).await? {
            tracing::warn!(email = %request.email, "Registration rejected, email already taken");
            return Err(CustomerError::DuplicateEmail(request.email.0));
        }

        let new_customer = request.into_new_customer();
        let id = self.dao.insert(&new_customer).await?;

        tracing::info!(customer_id = id, email = %new_customer.email, "Customer registered");
        Ok(new_customer.with_id(id))
    }

    async fn remove_inner(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.dao.exists_with_id(id).await? {
            tracing::warn!(customer_id = id, "Delete rejected, customer not found");
            return Err(CustomerError::NotFound(id));
        }

        self.dao.delete_by_id(id).await?;

        tracing::info!(customer_id = id, "Customer removed");
        Ok(())
    }

    async fn apply_edit_inner(
        &self,
        id: CustomerId,
        request: CustomerEditRequest,
    ) -> Result<Customer, CustomerError> {
        request.validate()?;

        let mut customer = self.find(id).await?;
        let mut changed = Vec::new();

        if let Some(name) = request.name {
            if name != customer.name {
                customer.name = name;
                changed.push("name");
            }
        }

        if let Some(email) = request.email {
            if email != customer.email {
                if self.dao.exists_with_email(email.as_str()).await? {
                    tracing::warn!(customer_id = id, email = %email, "Edit rejected, email already taken");
                    return Err(CustomerError::DuplicateEmail(email.0));
                }
                customer.email = email;
                changed.push("email");
            }
        }

        if let Some(age) = request.age {
            if age != customer.age {
                customer.age = age;
                changed.push("age");
            }
        }

        if changed.is_empty() {
            tracing::warn!(customer_id = id, "Edit rejected, no data changes found");
            return Err(CustomerError::NoChanges);
        }

        self.dao.update(&customer).await?;

        tracing::info!(customer_id = id, fields = ?changed, "Customer updated");
        Ok(customer)
    }

    fn record<T>(&self, operation: &str, result: &Result<T, CustomerError>, started: Instant) {
        if let Some(ref metrics) = self.metrics {
            let outcome = match result {
                Ok(_) => "ok",
                Err(e) => e.kind(),
            };
            metrics.record_operation(operation, outcome, started.elapsed());
        }

        if let Err(CustomerError::Storage(e)) = result {
            tracing::error!(operation, error = %e, "Customer storage failure");
        }
    }
}
