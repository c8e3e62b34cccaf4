//! Process entry point.
//!
//! Loads configuration, initializes logging, connects to MongoDB (fatal on
//! failure), and runs the Actix-Web server with CORS and JSON body parsing
//! on the configured address (port 8000 by default).

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use company_records_backend::config::AppConfig;
use company_records_backend::db::Database;
use company_records_backend::routes::{configure_all_routes, not_found};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    let config = AppConfig::from_env();

    // A dead database is fatal at startup: report and exit before
    // accepting any traffic.
    let database = match Database::connect(&config).await {
        Ok(database) => database,
        Err(e) => {
            error!("failed to connect to MongoDB at {}: {}", config.mongodb_uri, e);
            return Err(std::io::Error::other(e));
        }
    };

    let db_handle = web::Data::new(database);
    let bind_address = config.bind_address.clone();

    info!("Server is running on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(db_handle.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Log filter from `RUST_LOG`, defaulting to request-level visibility.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// Cross-origin requests are permitted from any origin.
fn configure_cors() -> Cors {
    Cors::permissive()
}
