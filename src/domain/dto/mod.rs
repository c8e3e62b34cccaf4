//! Request and response DTOs for the HTTP layer.
//!
//! Requests deserialize from JSON with `validator`-derived checks applied in
//! the handlers before anything touches the store; update requests carry
//! optional fields and turn into `$set` patch documents containing only what
//! the client supplied. Responses flatten the store-assigned `ObjectId` into
//! a plain hex string so clients never see BSON extended JSON.

pub mod departments;
pub mod employees;
pub mod products;
