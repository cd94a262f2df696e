use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum MemberError {
    /// A member with the requested name already exists.
    ///
    /// Raised by the pre-insert lookup and by the unique index on `member.name`
    /// when two writers race past the lookup. Results in 409 Conflict.
    #[error("Member with name '{0}' already exists")]
    DuplicateName(String),

    /// No member exists with the given id.
    ///
    /// Results in 404 Not Found.
    #[error("Member {0} not found")]
    NotFound(i32),

    /// The name field is missing, empty or only whitespace.
    ///
    /// Rejected before any storage access. Results in 400 Bad Request.
    #[error("Member name must not be empty")]
    EmptyName,
}

/// Converts member errors into HTTP responses.
///
/// - `DuplicateName` → 409 Conflict
/// - `NotFound` → 404 Not Found
/// - `EmptyName` → 400 Bad Request
impl IntoResponse for MemberError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateName(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyName => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
