use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// A single entry of the `errors` array.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorItem {
    pub code: String,
    pub title: String,
}

/// Error body shared by every endpoint: `{"errors": [{"code", "title"}]}`.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorItem>,
}

/// Canonical error codes exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    Internal,
    UnprocessableEntity,
    NotFound,
}

impl ApiErrorCode {
    pub fn code(self) -> &'static str {
        match self {
            ApiErrorCode::Internal => "ERROR-0",
            ApiErrorCode::UnprocessableEntity => "ERROR-1",
            ApiErrorCode::NotFound => "ERROR-2",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ApiErrorCode::Internal => "Internal Server Error",
            ApiErrorCode::UnprocessableEntity => "Unprocessable Entity",
            ApiErrorCode::NotFound => "Not Found",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ApiErrorCode> for ErrorResponse {
    fn from(code: ApiErrorCode) -> Self {
        Self {
            errors: vec![ErrorItem {
                code: code.code().to_string(),
                title: code.title().to_string(),
            }],
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
