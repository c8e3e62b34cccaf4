//! Product entity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::domain::schema::RecordSchema;

/// Schema enforced before every single-document product write.
pub static PRODUCT_SCHEMA: RecordSchema = RecordSchema {
    entity: "product",
    fields: &["name", "client"],
};

/// A product record: what was delivered and to whom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub client: String,
}

impl Product {
    pub fn new(name: String, client: String) -> Self {
        Self {
            id: None,
            name,
            client,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl Record for Product {
    const COLLECTION: &'static str = "products";

    fn schema() -> &'static RecordSchema {
        &PRODUCT_SCHEMA
    }

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
