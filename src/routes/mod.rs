//! API route configuration.
//!
//! Registers the CRUD endpoints for each entity under the shared `/api`
//! prefix, plus a `/health` endpoint for monitoring. Unmatched paths fall
//! through to [`not_found`], wired as the app's default service in `main`.
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//!
//! let app = App::new()
//!     .configure(configure_all_routes)
//!     .default_service(web::route().to(not_found));
//! ```

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::handlers;

/// Registers every route of the application.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_employee_routes(cfg);
    configure_department_routes(cfg);
    configure_product_routes(cfg);
}

/// Employee CRUD under `/api/employees`.
fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/employees")
            .service(handlers::employees::list_employees)
            .service(handlers::employees::create_employee)
            .service(handlers::employees::get_employee)
            .service(handlers::employees::update_employee)
            .service(handlers::employees::delete_employee),
    );
}

/// Department CRUD under `/api/departments`.
fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/departments")
            .service(handlers::departments::list_departments)
            .service(handlers::departments::create_department)
            .service(handlers::departments::get_department)
            .service(handlers::departments::update_department)
            .service(handlers::departments::delete_department),
    );
}

/// Product CRUD under `/api/products`.
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .service(handlers::products::list_products)
            .service(handlers::products::create_product)
            .service(handlers::products::get_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product),
    );
}

/// Health check used by load balancers and monitoring.
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "company_records_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for every unmatched path.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": "Not found..." }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn unmatched_path_returns_404_with_message() {
        let app = test::init_service(
            App::new().default_service(web::route().to(not_found)),
        )
        .await;

        let request = test::TestRequest::get().uri("/api/nothing-here").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "Not found...");
    }

    #[actix_web::test]
    async fn health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;

        assert!(response.status().is_success());

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }
}
