//! HTTP response handling for errors

use super::types::HealthOpsError;
use crate::auth::types::GENERIC_AUTH_FAILURE_MESSAGE;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for HealthOpsError {
    fn status_code(&self) -> StatusCode {
        match self {
            HealthOpsError::Authentication(_) => StatusCode::UNAUTHORIZED,
            HealthOpsError::Denied(_) => StatusCode::SEE_OTHER,
            HealthOpsError::Validation(_) => StatusCode::BAD_REQUEST,
            HealthOpsError::NotFound(_) => StatusCode::NOT_FOUND,
            HealthOpsError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Denials are control flow, not errors: the caller is sent to the
        // sign-in or unauthorized landing page.
        if let HealthOpsError::Denied(denial) = self {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, denial.redirect_path()))
                .finish();
        }

        let (error_code, message) = match self {
            HealthOpsError::Authentication(_) => {
                ("AUTH_ERROR", GENERIC_AUTH_FAILURE_MESSAGE.to_string())
            }
            HealthOpsError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            HealthOpsError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            HealthOpsError::Conflict(_) => ("CONFLICT", self.to_string()),
            HealthOpsError::Database(_) => {
                ("DATABASE_ERROR", "Database operation failed".to_string())
            }
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
