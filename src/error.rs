//! Error types for the cafe endpoint
//!
//! Every request error is a client input error. Each one converts into a
//! `400 Bad Request` whose plain-text body is the error message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request validation failures of `GET /cafe`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CafeError {
    /// `city` is missing or not in the catalog
    #[error("unknown city")]
    UnknownCity,

    /// `count` is not a non-negative integer
    #[error("incorrect count")]
    IncorrectCount,
}

impl CafeError {
    pub fn status(&self) -> StatusCode {
        match self {
            CafeError::UnknownCity | CafeError::IncorrectCount => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
