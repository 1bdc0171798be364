use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::validation::ProductInput;
use crate::domain::product::value_objects::ProductId;

/// Full replacement of a product's mutable fields.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub input: ProductInput,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
