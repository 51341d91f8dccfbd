//! Cafe Domain Module
//!
//! This module contains the cafe listing logic, including:
//! - Request models (CafeQuery, Count)
//! - Filtering helpers (count parsing, search, serialization)
//! - The read-only catalog and application state
//! - The REST API handler

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::{list_cafes, routes};
pub use state::{AppState, Catalog, SharedState};
