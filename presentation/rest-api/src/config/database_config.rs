use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Storage settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional; in-memory store when unset)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: pool acquire timeout (default: 30)
/// - DATABASE_MIGRATIONS_PATH: migrations directory
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().with_context(|| {
                format!("DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {raw}")
            })?),
            None => DatabaseConfig::DEFAULT_ACQUIRE_TIMEOUT,
        };

        let migrations_path = lookup("DATABASE_MIGRATIONS_PATH")
            .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            acquire_timeout,
            migrations_path,
        })
    }
}

/// Builds the product repository for the configured storage
///
/// With a DATABASE_URL the PostgreSQL pool is opened and migrations are
/// applied; otherwise products live in memory for the lifetime of the process.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_product_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    let Some(url) = settings.url.clone() else {
        tracing::warn!("DATABASE_URL not set, products are kept in memory");
        return Ok(Arc::new(ProductRepositoryInMemory::new()));
    };

    let config = DatabaseConfig::new(url)
        .with_max_connections(settings.max_connections)
        .with_acquire_timeout(settings.acquire_timeout);

    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool, &settings.migrations_path)
        .await
        .context("failed to run database migrations")?;

    Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> anyhow::Result<DatabaseSettings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DatabaseSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_default_to_in_memory_storage() {
        let settings = settings(&[]).unwrap();

        assert!(settings.url.is_none());
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_treat_blank_database_url_as_unset() {
        let settings = settings(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(settings.url.is_none());
    }

    #[test]
    fn should_read_pool_settings() {
        let settings = settings(&[
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "3"),
            ("DATABASE_MIGRATIONS_PATH", "/srv/migrations"),
        ])
        .unwrap();

        assert_eq!(settings.url.as_deref(), Some("postgres://localhost/catalog"));
        assert_eq!(settings.max_connections, 20);
        assert_eq!(settings.acquire_timeout, Duration::from_secs(3));
        assert_eq!(settings.migrations_path, "/srv/migrations");
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        assert!(settings(&[("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
    }

    #[tokio::test]
    async fn should_build_in_memory_repository_without_database_url() {
        let repository = init_product_repository(&settings(&[]).unwrap())
            .await
            .unwrap();

        assert!(repository.get_all().await.unwrap().is_empty());
    }
}
