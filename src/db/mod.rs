//! MongoDB connection management.
//!
//! One [`Database`] handle is created at startup, verified with a `ping`,
//! and shared with every request through `actix_web::web::Data`. The
//! MongoDB driver pools connections internally, so cloning the handle is
//! cheap and no further connection management happens at this layer.
//!
//! Connection failure at startup is fatal: the process logs the error and
//! exits before serving any traffic.
//!
//! ```rust,ignore
//! let config = AppConfig::from_env();
//! let database = Database::connect(&config).await?;
//! let employees = database.get_database().collection::<Employee>("employees");
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::AppConfig;

/// MongoDB connection wrapper.
///
/// Holds the driver client plus the configured database name and hands out
/// `mongodb::Database` instances to the repository layer.
#[derive(Clone)]
pub struct Database {
    /// MongoDB client (internally pooled).
    client: Client,
    /// Name of the database the collections live in.
    database_name: String,
}

impl Database {
    /// Establishes and verifies a MongoDB connection.
    ///
    /// Parses the configured URI, connects, and runs a `ping` against the
    /// target database so a dead server is reported at startup rather than
    /// on the first request.
    ///
    /// # Errors
    ///
    /// Returns the driver error when the URI is malformed or the server is
    /// unreachable. The caller treats this as fatal.
    pub async fn connect(config: &AppConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;

        // Application name shows up in server logs and profiler output.
        client_options.app_name = Some("company_records".to_string());

        let client = Client::with_options(client_options)?;

        // Connection test
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("Successfully connected to the database: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// Returns the `mongodb::Database` the repositories operate on.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// Returns the underlying client for client-level operations.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the configured database name.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
