use crate::domain::errors::RepositoryError;

use super::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a failed lookup by id, keeping "no such row" distinct from
    /// storage failures.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
