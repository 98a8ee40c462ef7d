//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itemdash_core::DashError;
use serde::{Deserialize, Serialize};
use tracing::error;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch dashboard items";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create dashboard item";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error the API reports to its caller.
///
/// Store faults carry only a generic message; the cause is logged when the
/// error is built.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Failure of the list operation.
    pub fn fetch(err: DashError) -> Self {
        Self::from_dash(err, FETCH_FAILED_MESSAGE, "Error fetching dashboard items")
    }

    /// Failure of the create operation.
    pub fn create(err: DashError) -> Self {
        Self::from_dash(err, CREATE_FAILED_MESSAGE, "Error creating dashboard item")
    }

    /// A create request whose body could not be read.
    pub fn unreadable_create_body(reason: impl std::fmt::Display) -> Self {
        error!(%reason, "Error creating dashboard item: unreadable request body");
        Self::internal(CREATE_FAILED_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }

    fn from_dash(err: DashError, generic: &str, context: &str) -> Self {
        match err {
            DashError::Validation(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            DashError::Store(cause) => {
                error!(error = %cause, "{}", context);
                Self::internal(generic)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
