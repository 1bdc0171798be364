//! Process-local product store.
//!
//! Rows live in an ordered map guarded by an async `RwLock`; ids come from a
//! counter that only moves forward, so a deleted id is never handed out again.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::validation::ProductFields;
use business::domain::product::value_objects::ProductId;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

#[derive(Default)]
pub struct ProductRepositoryInMemory {
    table: RwLock<Table>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let now = Utc::now();
        let product = Product::from_repository(
            ProductId::new(table.last_id),
            fields.name.clone(),
            fields.price.clone(),
            now,
            now,
        );
        table.rows.insert(product.id, product.clone());

        Ok(product)
    }

    async fn update(
        &self,
        id: ProductId,
        fields: &ProductFields,
    ) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        let product = table.rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        product.name = fields.name.clone();
        product.price = fields.price.clone();
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::Price;

    fn fields(name: &str, price: &str) -> ProductFields {
        ProductFields {
            name: Some(name.to_string()),
            price: Price::parse(price).unwrap(),
        }
    }

    #[tokio::test]
    async fn should_start_empty() {
        let repo = ProductRepositoryInMemory::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_insert() {
        let repo = ProductRepositoryInMemory::new();

        let first = repo.insert(&fields("Milk", "1.10")).await.unwrap();
        let second = repo.insert(&fields("Eggs", "2.40")).await.unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_find_inserted_product_by_id() {
        let repo = ProductRepositoryInMemory::new();
        let created = repo.insert(&fields("Super Product", "23.30")).await.unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.price.to_string(), "23.30");
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let repo = ProductRepositoryInMemory::new();

        let result = repo.get_by_id(ProductId::new(999)).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_replace_fields_and_keep_id_on_update() {
        let repo = ProductRepositoryInMemory::new();
        let created = repo.insert(&fields("Super Product", "10.00")).await.unwrap();

        let updated = repo
            .update(created.id, &fields("Super Product updated", "23.30"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("Super Product updated"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn should_fail_update_of_missing_product() {
        let repo = ProductRepositoryInMemory::new();

        let result = repo.update(ProductId::new(3), &fields("Ghost", "1")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_remove_product_and_never_reuse_its_id() {
        let repo = ProductRepositoryInMemory::new();
        let created = repo.insert(&fields("Bread", "0.90")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        let next = repo.insert(&fields("Butter", "2.10")).await.unwrap();

        assert!(matches!(
            repo.get_by_id(created.id).await,
            Err(RepositoryError::NotFound)
        ));
        assert_ne!(next.id, created.id);
    }
}
