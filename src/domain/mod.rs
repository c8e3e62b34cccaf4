//! Domain layer: entities, request/response DTOs, and the record schemas
//! validated before writes.

pub mod dto;
pub mod entities;
pub mod schema;
