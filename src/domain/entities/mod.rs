//! Domain entities persisted as MongoDB documents.
//!
//! Each entity is a flat record with a store-assigned `_id` and a static
//! [`RecordSchema`] describing its required string fields. The [`Record`]
//! trait is the seam between the entities and the generic
//! [`RecordStore`](crate::repositories::record_store::RecordStore): it names
//! the collection, exposes the schema for write-time validation, and lets
//! the store assign the generated identifier after an insert.

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::schema::RecordSchema;

pub mod department;
pub mod employee;
pub mod product;

pub use department::Department;
pub use employee::Employee;
pub use product::Product;

/// A persistable record type.
///
/// Implementors map one-to-one onto a MongoDB collection and serialize with
/// the exact field names their schema validates.
pub trait Record: Serialize + DeserializeOwned + Unpin + Send + Sync {
    /// Name of the MongoDB collection the records live in.
    const COLLECTION: &'static str;

    /// Required-field rules checked before every single-document write.
    fn schema() -> &'static RecordSchema;

    /// Store-assigned identifier, `None` until the record is persisted.
    fn id(&self) -> Option<ObjectId>;

    /// Sets the identifier after the store has generated one.
    fn set_id(&mut self, id: ObjectId);
}
