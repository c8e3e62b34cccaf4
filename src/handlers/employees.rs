//! Employee CRUD endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::dto::employees::{
    CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest,
};
use crate::domain::entities::Employee;
use crate::repositories::RecordStore;

/// Lists every employee.
///
/// `GET /api/employees` → 200 with a JSON array (possibly empty).
#[get("")]
pub async fn list_employees(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Employee>::new(&db);
    let employees = store.find(doc! {}).await?;

    let response: Vec<EmployeeResponse> =
        employees.into_iter().map(EmployeeResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// Fetches one employee by id.
///
/// `GET /api/employees/{id}` → 200 with the record, 404 when absent,
/// 400 when the id is not a valid ObjectId.
#[get("/{id}")]
pub async fn get_employee(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Employee>::new(&db);

    let employee = store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("employee {id} not found")))?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Creates an employee.
///
/// `POST /api/employees` with `{ firstName, lastName, department }` →
/// 201 with the created record, 400 on validation failure.
#[post("")]
pub async fn create_employee(
    db: web::Data<Database>,
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let store = RecordStore::<Employee>::new(&db);
    let created = store.insert(Employee::from(payload.into_inner())).await?;

    Ok(HttpResponse::Created().json(EmployeeResponse::from(created)))
}

/// Patches an employee by id.
///
/// `PUT /api/employees/{id}` with any subset of the employee fields →
/// 200 with the updated record, 404 when absent, 400 on an empty body or
/// invalid field values.
#[put("/{id}")]
pub async fn update_employee(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let patch = payload.into_inner().into_patch();
    if patch.is_empty() {
        return Err(AppError::ValidationError(
            "no fields to update".to_string(),
        ));
    }

    let store = RecordStore::<Employee>::new(&db);

    let updated = store
        .update_by_id(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("employee {id} not found")))?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(updated)))
}

/// Deletes an employee by id.
///
/// `DELETE /api/employees/{id}` → 200 with a confirmation message,
/// 404 when absent. Deletion is physical and immediate.
#[delete("/{id}")]
pub async fn delete_employee(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Employee>::new(&db);

    if !store.delete_by_id(&id).await? {
        return Err(AppError::NotFound(format!("employee {id} not found")));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("employee {id} deleted")
    })))
}
