//! Data access layer.
//!
//! One generic store ([`record_store::RecordStore`]) covers all record
//! collections; the entities select their collection and schema through the
//! [`Record`](crate::domain::entities::Record) trait.

pub mod record_store;

pub use record_store::RecordStore;
