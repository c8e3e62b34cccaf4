//! Generic document store adapter.
//!
//! [`RecordStore<T>`] wraps a `mongodb::Collection<T>` and exposes the CRUD
//! operations the handlers need: unrestricted and filtered reads,
//! schema-validated inserts, `$set`-style single and multi-document updates,
//! and single and multi-document deletes.
//!
//! Filters are plain equality documents; supplying several fields means
//! implicit AND, and the empty document matches everything. Patches are
//! written as-is under `$set`, with no type checking at update time.
//!
//! The store is constructed per request from the shared [`Database`] handle;
//! it holds no state beyond the collection reference, so construction is
//! free of I/O.
//!
//! ```rust,ignore
//! let store = RecordStore::<Employee>::new(&database);
//! let everyone = store.find(doc! {}).await?;
//! let john = store.find_one(doc! { "firstName": "John" }).await?;
//! ```

use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::Record;

/// CRUD operations on one record collection.
pub struct RecordStore<T: Record> {
    collection: mongodb::Collection<T>,
}

impl<T: Record> RecordStore<T> {
    /// Binds the store to the entity's collection.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<T>(T::COLLECTION),
        }
    }

    /// Returns every record matching the filter; `doc! {}` matches all.
    pub async fn find(&self, filter: Document) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Returns the first record matching the filter, or `None`.
    pub async fn find_one(&self, filter: Document) -> AppResult<Option<T>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Looks a record up by its identifier.
    ///
    /// # Errors
    ///
    /// `ValidationError` when `id` is not a valid ObjectId hex string;
    /// `DatabaseError` on query failure.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;
        self.find_one(doc! { "_id": object_id }).await
    }

    /// Validates and persists one record, returning it with the
    /// store-assigned identifier filled in.
    ///
    /// # Errors
    ///
    /// `ValidationError` naming every offending field when the record fails
    /// its schema; `DatabaseError` on insert failure.
    pub async fn insert(&self, mut record: T) -> AppResult<T> {
        let schema = T::schema();

        let candidate = mongodb::bson::to_document(&record)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let violations = schema.validate(&candidate);
        if !violations.is_empty() {
            return Err(AppError::ValidationError(
                schema.violation_message(&violations),
            ));
        }

        let result = self
            .collection
            .insert_one(&record)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("store returned a non-ObjectId id".to_string()))?;
        record.set_id(id);

        Ok(record)
    }

    /// Applies the patch to at most one matching record via `$set`.
    ///
    /// Patch values are written as-is; no schema check runs here. Returns
    /// the number of modified documents (0 or 1).
    pub async fn update_one(&self, filter: Document, patch: Document) -> AppResult<u64> {
        let result = self
            .collection
            .update_one(filter, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count)
    }

    /// Applies the patch to every matching record via `$set`.
    ///
    /// Bulk updates bypass schema validation by design; see DESIGN.md.
    pub async fn update_many(&self, filter: Document, patch: Document) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(filter, doc! { "$set": patch })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count)
    }

    /// Patches one record by id and returns the post-update document, or
    /// `None` when no record has that id.
    pub async fn update_by_id(&self, id: &str, patch: Document) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": patch })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Removes at most one matching record; returns the count removed.
    pub async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// Removes every matching record; returns the count removed.
    ///
    /// Idempotent: deleting from an already-empty collection succeeds with
    /// a count of zero.
    pub async fn delete_many(&self, filter: Document) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// Removes one record by id; `true` when something was deleted.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;
        let deleted = self.delete_one(doc! { "_id": object_id }).await?;
        Ok(deleted > 0)
    }
}

/// Parses a client-supplied identifier into an ObjectId.
fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("invalid record id: {id}")))
}
