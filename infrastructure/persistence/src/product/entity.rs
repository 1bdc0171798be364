use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, ProductId};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            Price::from_repository(self.price),
            self.created_at,
            self.updated_at,
        )
    }
}
