//! Application configuration
//!
//! Configuration comes from environment variables, with defaults for
//! everything.

use std::{env, path::PathBuf};

use crate::cafe::Catalog;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: String,
    /// Port to bind the server to
    pub port: u16,
    /// JSON catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load configuration from `HOST`, `PORT` and `CAFE_CATALOG_PATH`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            catalog_path: env::var_os("CAFE_CATALOG_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the catalog this configuration points at.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
