//! Employee entity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::domain::schema::RecordSchema;

/// Schema enforced before every single-document employee write.
pub static EMPLOYEE_SCHEMA: RecordSchema = RecordSchema {
    entity: "employee",
    fields: &["firstName", "lastName", "department"],
};

/// An employee record.
///
/// `department` holds the identifier of a [`Department`](super::Department)
/// record. The reference is informational only; no referential integrity is
/// enforced on either side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// Department identifier (unenforced reference).
    pub department: String,
}

impl Employee {
    /// Creates an unsaved employee; the store assigns the id on insert.
    pub fn new(first_name: String, last_name: String, department: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            department,
        }
    }

    /// Identifier as a hex string, if the record has been persisted.
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl Record for Employee {
    const COLLECTION: &'static str = "employees";

    fn schema() -> &'static RecordSchema {
        &EMPLOYEE_SCHEMA
    }

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let employee = Employee::new(
            "John".to_string(),
            "Doe".to_string(),
            "6473231329ac34874b39d19f".to_string(),
        );

        let doc = bson::to_document(&employee).unwrap();

        assert_eq!(doc.get_str("firstName").unwrap(), "John");
        assert_eq!(doc.get_str("lastName").unwrap(), "Doe");
        assert_eq!(doc.get_str("department").unwrap(), "6473231329ac34874b39d19f");
        // Unsaved records must not carry a null _id into the store.
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn serialized_form_passes_its_own_schema() {
        let employee = Employee::new(
            "Amanda".to_string(),
            "Cruz".to_string(),
            "6473230329ac34874b39d19d".to_string(),
        );

        let doc = bson::to_document(&employee).unwrap();
        assert!(Employee::schema().validate(&doc).is_empty());
    }
}
