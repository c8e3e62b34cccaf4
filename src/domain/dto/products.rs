//! Product request/response DTOs.

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Product;

/// Body of `POST /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "client must not be empty"))]
    pub client: String,
}

impl From<CreateProductRequest> for Product {
    fn from(request: CreateProductRequest) -> Self {
        Product::new(request.name, request.client)
    }
}

/// Body of `PUT /api/products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "client must not be empty"))]
    pub client: Option<String>,
}

impl UpdateProductRequest {
    /// Builds the `$set` payload from the supplied fields.
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};

        if let Some(name) = self.name {
            patch.insert("name", name);
        }
        if let Some(client) = self.client {
            patch.insert("client", client);
        }

        patch
    }
}

/// Product as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub client: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id_string().unwrap_or_default(),
            name: product.name,
            client: product.client,
        }
    }
}
