use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::validation::ProductFields;
use super::value_objects::ProductId;

/// Storage port for products.
///
/// Implementations do not re-validate fields; callers pass only values that
/// went through the validation gate.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Returns `RepositoryError::NotFound` when no row has this id.
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Persists a new row and returns it with its assigned id.
    async fn insert(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
    /// Replaces every mutable field of an existing row.
    async fn update(
        &self,
        id: ProductId,
        fields: &ProductFields,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
