// User Intake - Configuration
// Environment-driven startup settings; .env files are honored.

use std::env;
use std::path::PathBuf;

use crate::error::{IntakeError, Result};

/// Env var naming the document store location. Required at startup.
pub const DB_PATH_VAR: &str = "USER_DB_PATH";

/// Env var for the server bind address. Optional.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Startup configuration for the CLI and the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the document store.
    pub db_path: PathBuf,
    /// Address the web server listens on.
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from the environment (and a .env file if present).
    ///
    /// A missing store path is a fatal startup condition, not a runtime
    /// error: this returns `Config` error and callers are expected to exit.
    pub fn from_env() -> Result<Self> {
        // Absent .env is fine; the variables may come from the environment.
        let _ = dotenvy::dotenv();

        let db_path = env::var(DB_PATH_VAR)
            .map_err(|_| {
                IntakeError::Config(format!("No {} found in environment variables", DB_PATH_VAR))
            })?
            .into();

        let bind_addr =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self { db_path, bind_addr })
    }
}
