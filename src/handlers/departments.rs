//! Department CRUD endpoints. Same shape as the employee handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::dto::departments::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};
use crate::domain::entities::Department;
use crate::repositories::RecordStore;

#[get("")]
pub async fn list_departments(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Department>::new(&db);
    let departments = store.find(doc! {}).await?;

    let response: Vec<DepartmentResponse> =
        departments.into_iter().map(DepartmentResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{id}")]
pub async fn get_department(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Department>::new(&db);

    let department = store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("department {id} not found")))?;

    Ok(HttpResponse::Ok().json(DepartmentResponse::from(department)))
}

#[post("")]
pub async fn create_department(
    db: web::Data<Database>,
    payload: web::Json<CreateDepartmentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let store = RecordStore::<Department>::new(&db);
    let created = store.insert(Department::from(payload.into_inner())).await?;

    Ok(HttpResponse::Created().json(DepartmentResponse::from(created)))
}

#[put("/{id}")]
pub async fn update_department(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<UpdateDepartmentRequest>,
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

    let store = RecordStore::<Department>::new(&db);

    let updated = store
        .update_by_id(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("department {id} not found")))?;

    Ok(HttpResponse::Ok().json(DepartmentResponse::from(updated)))
}

#[delete("/{id}")]
pub async fn delete_department(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Department>::new(&db);

    if !store.delete_by_id(&id).await? {
        return Err(AppError::NotFound(format!("department {id} not found")));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("department {id} deleted")
    })))
}
