//! Department entity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::domain::schema::RecordSchema;

/// Schema enforced before every single-document department write.
pub static DEPARTMENT_SCHEMA: RecordSchema = RecordSchema {
    entity: "department",
    fields: &["name"],
};

/// A department record, referenced by employees through its identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

impl Department {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl Record for Department {
    const COLLECTION: &'static str = "departments";

    fn schema() -> &'static RecordSchema {
        &DEPARTMENT_SCHEMA
    }

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
