use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validation::validate;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Existence is checked before validation: an unknown id is a 404
        // even when the payload is also invalid.
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        let fields = validate(params.input).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected update of product {}: {}", params.id, e));
        })?;

        let updated_product = self
            .repository
            .update(params.id, &fields)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
