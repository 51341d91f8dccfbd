//! Cafe Listing Helpers
//!
//! Pure functions behind the `/cafe` endpoint: count parsing, search
//! matching, selection and serialization.

use super::models::{Count, CAFE_SEPARATOR};
use crate::error::CafeError;

/// Parses the raw `count` parameter.
///
/// An absent or empty value means no limit. Anything else must be a
/// non-negative decimal integer.
pub fn parse_count(raw: Option<&str>) -> Result<Count, CafeError> {
    match raw {
        None | Some("") => Ok(Count::Unlimited),
        Some(value) => value
            .parse::<usize>()
            .map(Count::AtMost)
            .map_err(|_| CafeError::IncorrectCount),
    }
}

/// Returns true when `name` contains `search`, ignoring case.
///
/// `search` is expected to be lowercased already.
pub fn matches_search(name: &str, search: &str) -> bool {
    name.to_lowercase().contains(search)
}

/// Applies the search filter and the count limit, keeping catalog order.
pub fn select_cafes<'a>(cafes: &'a [String], search: Option<&str>, count: Count) -> Vec<&'a str> {
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

    let limit = match count {
        Count::Unlimited => usize::MAX,
        Count::AtMost(n) => n,
    };

    cafes
        .iter()
        .map(String::as_str)
        .filter(|name| match &needle {
            Some(needle) => matches_search(name, needle),
            None => true,
        })
        .take(limit)
        .collect()
}

/// Joins cafe names into a response body.
///
/// Example output: `"кафе1,вилка"`. No names produce an empty string.
pub fn join_cafes(names: &[&str]) -> String {
    names.join(CAFE_SEPARATOR)
}
