//! REST API handler for cafe listing
//!
//! This module implements `GET /cafe` and the transport-free listing
//! operation behind it.

use super::{helpers::*, models::*, state::*};
use crate::error::CafeError;
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use std::collections::HashMap;

/// Creates routes for cafe-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/cafe", get(get_cafes))
}

/// Endpoint: GET /cafe?city=..&count=..&search=..
/// Returns the matching cafe names of a city, comma separated.
async fn get_cafes(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<String, CafeError> {
    let query = CafeQuery::from_params(&params);

    match list_cafes(&state.catalog, &query) {
        Ok(body) => {
            tracing::debug!(city = ?query.city, bytes = body.len(), "Cafes listed");
            Ok(body)
        }
        Err(err) => {
            tracing::warn!(
                city = ?query.city,
                count = ?query.count,
                error = %err,
                "Rejected cafe query"
            );
            Err(err)
        }
    }
}

/// Validates `query` against `catalog` and renders the response body.
///
/// The city is checked before the count, so a request with both wrong
/// reports `UnknownCity`.
pub fn list_cafes(catalog: &Catalog, query: &CafeQuery) -> Result<String, CafeError> {
    let cafes = query
        .city
        .as_deref()
        .and_then(|city| catalog.cafes(city))
        .ok_or(CafeError::UnknownCity)?;

    let count = parse_count(query.count.as_deref())?;
    let selected = select_cafes(cafes, query.search.as_deref(), count);

    Ok(join_cafes(&selected))
}
