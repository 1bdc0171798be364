use chrono::{DateTime, Utc};

use super::value_objects::{Price, ProductId};

/// A catalog item as persisted by the repository.
///
/// Products are only built from stored rows: the repository assigns the id
/// and the timestamps, so there is no constructor that validates input here.
/// Validation happens in [`super::validation::validate`] before any write.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: Option<String>,
        price: Price,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            created_at,
            updated_at,
        }
    }
}
