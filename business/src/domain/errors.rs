/// Failures reported by repository adapters.
///
/// Messages are code-style identifiers so the presentation layer can
/// translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}
