use serde::{Deserialize, Serialize};

use super::value_objects::{CustomerId, Email};

// ============================================================================
// Customer Entity
// ============================================================================

/// A stored customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub age: i32,
}

/// A customer that has not been persisted yet and has no identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Email,
    pub age: i32,
}

impl NewCustomer {
    /// Attach the identity assigned by storage
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}
