//! Cafe Service Library
//!
//! This library provides a small HTTP service that lists the cafes of a
//! city, optionally filtered by name and limited in number.

// Domain modules
pub mod cafe;
pub mod error;

// Infrastructure
pub mod config;
pub mod router;
pub mod telemetry;
