//! HTTP request handlers.
//!
//! One module per entity, each exposing the same five CRUD endpoints:
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/` | 200, array of records |
//! | `GET` | `/{id}` | 200, record |
//! | `POST` | `/` | 201, created record |
//! | `PUT` | `/{id}` | 200, updated record |
//! | `DELETE` | `/{id}` | 200, confirmation |
//!
//! Handlers receive the shared [`Database`](crate::db::Database) handle via
//! `web::Data`, never through global state, and turn every store or
//! validation failure into an `AppError` response instead of panicking.

pub mod departments;
pub mod employees;
pub mod products;
