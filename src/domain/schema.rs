//! Declarative record schemas and write-time validation.
//!
//! Each entity declares a [`RecordSchema`]: the list of fields that must be
//! present and hold non-empty strings. Validation is a pure function from a
//! candidate BSON document to a list of per-field violations, with no
//! knowledge of the storage call path, so the same check runs uniformly
//! before every single-document write.
//!
//! Reads never validate: whatever is stored comes back as-is. Bulk
//! `update_many` / `delete_many` operations also skip this check; that
//! asymmetry is deliberate (see DESIGN.md).

use mongodb::bson::{Bson, Document};
use std::fmt;

/// Required-field rules for one entity type.
///
/// Every listed field must be present and hold a non-empty BSON string.
/// Schemas are static data; validation never mutates anything.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    /// Entity name used in error messages ("employee", "department", ...).
    pub entity: &'static str,
    /// Fields that must be present as non-empty strings.
    pub fields: &'static [&'static str],
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The field is absent from the candidate document.
    Missing,
    /// The field is present but its value is not a string. Arrays and
    /// documents (including empty ones), numbers, booleans, and null all
    /// fall under this kind.
    NotAString,
    /// The field is a string but empty.
    Empty,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{}: required field is missing", self.field),
            ViolationKind::NotAString => write!(f, "{}: value must be a string", self.field),
            ViolationKind::Empty => write!(f, "{}: value must not be empty", self.field),
        }
    }
}

impl RecordSchema {
    /// Checks a candidate document against the schema.
    ///
    /// Returns one violation per offending field; an empty vector means the
    /// record is valid. Fields not named by the schema are ignored, and the
    /// `_id` field is never inspected.
    pub fn validate(&self, record: &Document) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for &field in self.fields {
            let kind = match record.get(field) {
                None | Some(Bson::Null) => Some(ViolationKind::Missing),
                Some(Bson::String(value)) if value.is_empty() => Some(ViolationKind::Empty),
                Some(Bson::String(_)) => None,
                Some(_) => Some(ViolationKind::NotAString),
            };

            if let Some(kind) = kind {
                violations.push(FieldViolation { field, kind });
            }
        }

        violations
    }

    /// Joins violations into the message carried by
    /// [`AppError::ValidationError`](crate::core::errors::AppError).
    pub fn violation_message(&self, violations: &[FieldViolation]) -> String {
        let details: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        format!("invalid {} record: {}", self.entity, details.join(", "))
    }
}
