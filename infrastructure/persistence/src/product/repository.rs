use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::validation::ProductFields;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, name, price, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(operation, error = %err, "Product query failed");
        RepositoryError::DatabaseError
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("get_all"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("get_by_id"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products (name, price, created_at, updated_at)
            VALUES ($1, $2, now(), now())
            RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(fields.price.amount())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("insert"))?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: ProductId,
        fields: &ProductFields,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "UPDATE products
            SET name = $2,
                price = $3,
                updated_at = now()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.value())
        .bind(&fields.name)
        .bind(fields.price.amount())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("update"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error("delete"))?;

        Ok(())
    }
}
