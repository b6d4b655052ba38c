use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

/// JSON error returned by every endpoint
///
/// Failures are reported uniformly as client errors with the underlying
/// message in `detail`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub error: String,
    pub detail: String,
    pub status: StatusCode,
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: detail.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            detail: self.detail.clone(),
            error: self.error.clone(),
            status_code: self.status.as_u16(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(self.body())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle path segment errors; actix answers these with 404 by default
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::bad_request("invalid_path", format!("Invalid path: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_bad_request_status() {
        let err = ApiError::bad_request("Failed to record listing swipe", "boom");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().status_code, 400);
        assert_eq!(err.body().detail, "boom");
        assert_eq!(err.to_string(), "Failed to record listing swipe: boom");
    }
}
