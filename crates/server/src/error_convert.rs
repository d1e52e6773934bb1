use axum::extract::rejection::JsonRejection;
use shared_types::AppError;

/// Convert an axum JSON body rejection into an `AppError`.
///
/// Syntax and shape errors map to `BadRequest`; a missing or wrong
/// `Content-Type` does too, so every client error carries the same JSON body.
pub fn json_rejection_to_app_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            AppError::bad_request(format!("Invalid request body: {}", e.body_text()))
        }
        JsonRejection::JsonSyntaxError(e) => {
            AppError::bad_request(format!("Malformed JSON: {}", e.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request("Expected `Content-Type: application/json`")
        }
        other => AppError::bad_request(other.body_text()),
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
