//! Employee request/response DTOs.

use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Employee;

/// Body of `POST /api/employees`.
///
/// All three fields are required non-empty strings; wrong-typed values are
/// rejected during deserialization, empty strings by the derived validator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,

    /// Department identifier. Not checked against the departments
    /// collection; the reference is informational only.
    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: String,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Employee::new(request.first_name, request.last_name, request.department)
    }
}

/// Body of `PUT /api/employees/{id}`.
///
/// Every field is optional; only supplied fields end up in the patch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "department must not be empty"))]
    pub department: Option<String>,
}

impl UpdateEmployeeRequest {
    /// Builds the `$set` payload from the supplied fields.
    ///
    /// Returns an empty document when the request carried no fields; the
    /// handler rejects that case before calling the store.
    pub fn into_patch(self) -> Document {
        let mut patch = doc! {};

        if let Some(first_name) = self.first_name {
            patch.insert("firstName", first_name);
        }
        if let Some(last_name) = self.last_name {
            patch.insert("lastName", last_name);
        }
        if let Some(department) = self.department {
            patch.insert("department", department);
        }

        patch
    }
}

/// Employee as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id_string().unwrap_or_default(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            department: employee.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_complete_input() {
        let request: CreateEmployeeRequest = serde_json::from_value(serde_json::json!({
            "firstName": "John",
            "lastName": "Doe",
            "department": "6473231329ac34874b39d19f",
        }))
        .unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_empty_strings() {
        let request: CreateEmployeeRequest = serde_json::from_value(serde_json::json!({
            "firstName": "",
            "lastName": "Doe",
            "department": "6473231329ac34874b39d19f",
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn create_request_rejects_array_valued_fields() {
        let result = serde_json::from_value::<CreateEmployeeRequest>(serde_json::json!({
            "firstName": ["John"],
            "lastName": "Doe",
            "department": "6473231329ac34874b39d19f",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn create_request_rejects_missing_fields() {
        let result = serde_json::from_value::<CreateEmployeeRequest>(serde_json::json!({
            "firstName": "John",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn update_patch_contains_only_supplied_fields() {
        let request = UpdateEmployeeRequest {
            first_name: Some("Chris".to_string()),
            last_name: None,
            department: Some("1111".to_string()),
        };

        let patch = request.into_patch();

        assert_eq!(patch.get_str("firstName").unwrap(), "Chris");
        assert_eq!(patch.get_str("department").unwrap(), "1111");
        assert!(!patch.contains_key("lastName"));
    }

    #[test]
    fn update_patch_is_empty_for_empty_request() {
        let request = UpdateEmployeeRequest {
            first_name: None,
            last_name: None,
            department: None,
        };

        assert!(request.into_patch().is_empty());
    }

    #[test]
    fn response_flattens_the_object_id() {
        use mongodb::bson::oid::ObjectId;

        let mut employee = Employee::new(
            "John".to_string(),
            "Doe".to_string(),
            "6473231329ac34874b39d19f".to_string(),
        );
        let oid = ObjectId::new();
        employee.id = Some(oid);

        let response = EmployeeResponse::from(employee);
        assert_eq!(response.id, oid.to_hex());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["firstName"], "John");
        assert!(json["id"].is_string());
    }
}
