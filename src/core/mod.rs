//! Core infrastructure shared by every layer: the application error type
//! and its HTTP response mapping.

pub mod errors;

pub use errors::{AppError, AppResult};
