//! Company records backend.
//!
//! An HR-style record-keeping REST API: employees, departments, and products
//! stored in MongoDB and exposed through CRUD endpoints under `/api`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/{employees,departments,products}
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← request/response translation
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   RecordStore   │ ← schema-validated CRUD on collections
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← document storage
//! └─────────────────┘
//! ```
//!
//! Records are validated at write time against declarative per-entity
//! schemas ([`domain::schema`]); reads return whatever is stored. The
//! database handle is created once at startup and injected into handlers
//! through `web::Data`, never held in global state.

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
