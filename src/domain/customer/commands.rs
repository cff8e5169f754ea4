use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::model::NewCustomer;
use super::value_objects::{validate_name, Email};

// ============================================================================
// Customer Requests
// ============================================================================

/// Payload for registering a new customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: Email,
    pub age: i32,
}

impl CustomerRegistrationRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: Email::new(email),
            age,
        }
    }

    pub fn validate(&self) -> Result<(), CustomerError> {
        validate_name(&self.name)?;
        self.email.validate()
    }

    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// Partial update payload
///
/// `None` means "leave unchanged". A JSON `null` and a missing key are
/// treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerEditRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub age: Option<i32>,
}

impl CustomerEditRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(Email::new(email));
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Validate only the fields that are present
    pub fn validate(&self) -> Result<(), CustomerError> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(ref email) = self.email {
            email.validate()?;
        }
        Ok(())
    }
}
