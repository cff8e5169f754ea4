use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::customer::CustomerError;

impl ResponseError for CustomerError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomerError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomerError::DuplicateEmail(_) => StatusCode::CONFLICT,
            CustomerError::NoChanges => StatusCode::BAD_REQUEST,
            CustomerError::InvalidName => StatusCode::BAD_REQUEST,
            CustomerError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            CustomerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Storage details stay in the logs
        let message = match self {
            CustomerError::Storage(_) => "Internal storage error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "status": status.as_u16(),
            "error": self.kind(),
            "message": message,
        }))
    }
}
