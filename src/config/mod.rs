//! Application configuration.
//!
//! All runtime settings come from environment variables, optionally loaded
//! from a `.env` file at startup. Every setting has a development-friendly
//! default so the server runs against a local MongoDB with no configuration
//! at all.
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `MONGODB_URI` | `mongodb://localhost:27017` | MongoDB connection string |
//! | `DATABASE_NAME` | `companyDB` | Database holding the collections |
//! | `BIND_ADDRESS` | `0.0.0.0:8000` | HTTP listen address |
//! | `RUST_LOG` | `info,actix_web=debug` | Log filter (read by `env_logger`) |

use std::env;

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection URI.
    pub mongodb_uri: String,
    /// Name of the database holding the record collections.
    pub database_name: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
}

impl AppConfig {
    /// Reads the configuration from the environment, falling back to the
    /// defaults documented above for anything unset.
    pub fn from_env() -> Self {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "companyDB".to_string());

        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        Self {
            mongodb_uri,
            database_name,
            bind_address,
        }
    }
}
