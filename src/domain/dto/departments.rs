//! Department request/response DTOs.

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Department;

/// Body of `POST /api/departments`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl From<CreateDepartmentRequest> for Department {
    fn from(request: CreateDepartmentRequest) -> Self {
        Department::new(request.name)
    }
}

/// Body of `PUT /api/departments/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

impl UpdateDepartmentRequest {
    /// Builds the `$set` payload from the supplied fields.
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};

        if let Some(name) = self.name {
            patch.insert("name", name);
        }

        patch
    }
}

/// Department as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id_string().unwrap_or_default(),
            name: department.name,
        }
    }
}
