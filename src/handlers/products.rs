//! Product CRUD endpoints. Same shape as the employee handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use mongodb::bson::doc;
use validator::Validate;

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::dto::products::{
    CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::domain::entities::Product;
use crate::repositories::RecordStore;

#[get("")]
pub async fn list_products(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Product>::new(&db);
    let products = store.find(doc! {}).await?;

    let response: Vec<ProductResponse> =
        products.into_iter().map(ProductResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{id}")]
pub async fn get_product(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Product>::new(&db);

    let product = store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

#[post("")]
pub async fn create_product(
    db: web::Data<Database>,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let store = RecordStore::<Product>::new(&db);
    let created = store.insert(Product::from(payload.into_inner())).await?;

    Ok(HttpResponse::Created().json(ProductResponse::from(created)))
}

#[put("/{id}")]
pub async fn update_product(
    db: web::Data<Database>,
    id: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
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

    let store = RecordStore::<Product>::new(&db);

    let updated = store
        .update_by_id(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id} not found")))?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(updated)))
}

#[delete("/{id}")]
pub async fn delete_product(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let store = RecordStore::<Product>::new(&db);

    if !store.delete_by_id(&id).await? {
        return Err(AppError::NotFound(format!("product {id} not found")));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("product {id} deleted")
    })))
}
