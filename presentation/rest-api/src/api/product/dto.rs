use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::model::Product;
use business::domain::product::validation::ProductInput;

/// Body of create and update requests.
///
/// Fields are accepted as any JSON value: the price rule is enforced by the
/// business layer, and the name is stored as sent.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name
    pub name: Option<Value>,
    /// Price as a decimal string, e.g. "23.30" (must be greater than zero)
    pub price: Option<Value>,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: into_text(request.name),
            price: into_text(request.price),
        }
    }
}

/// Strings pass unchanged, other scalars keep their JSON text, nulls drop out.
fn into_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: Option<String>,
    /// Price as a decimal string
    pub price: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price.to_string(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
