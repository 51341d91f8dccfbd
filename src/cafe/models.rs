//! Cafe Domain Models
//!
//! This module contains the request parameters and constants of the
//! cafe listing endpoint.

use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// Constants
// =============================================================================

/// Separator placed between cafe names in a response body
pub const CAFE_SEPARATOR: &str = ",";

/// Cities and their cafes served when no catalog file is configured
pub const BUILTIN_CATALOG: &[(&str, &[&str])] = &[
    (
        "moscow",
        &["кафе1", "вилка", "кофе-хауз", "кофе с собой", "ложка"],
    ),
    ("tula", &["Кофейня у кремля", "Самовар", "Пряник и кофе"]),
];

// =============================================================================
// Request Models
// =============================================================================

/// Raw query parameters of `GET /cafe`, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CafeQuery {
    /// City to list cafes for
    pub city: Option<String>,

    /// Maximum number of names to return, as sent by the client
    pub count: Option<String>,

    /// Case-insensitive substring filter
    pub search: Option<String>,
}

impl CafeQuery {
    /// Picks the known parameters out of a decoded query string map.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            city: params.get("city").cloned(),
            count: params.get("count").cloned(),
            search: params.get("search").cloned(),
        }
    }
}

/// On-disk catalog: a JSON object of `city -> [cafe, ...]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CatalogFile {
    /// Cafe names keyed by city, as written in the file
    pub cities: HashMap<String, Vec<String>>,
}

/// Upper bound on the number of cafes returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// No `count` was given, return every match
    Unlimited,

    /// Return at most this many matches
    AtMost(usize),
}
