use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::http::Envelope;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === APPLICATION ERRORS ===
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authorization error: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::ForeignKeyViolation(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        let status = self.status_code();

        let details = match self {
            // Raw driver errors are logged server-side and never leaked to
            // the caller.
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                let is_dev = cfg!(debug_assertions);
                if is_dev {
                    error.to_string()
                } else {
                    "An unexpected storage error occurred".to_string()
                }
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(Envelope::<()>::error(status.as_u16(), details))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_errors_map_to_expected_statuses() {
        let cases = [
            (
                AppError::Validation("cost must be greater than zero".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Unauthorized("invalid token".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::NotFound("no rows matched".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::DuplicateKey("order 7 already exists".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::ForeignKeyViolation("driver 999 does not exist".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Database(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected, "{err}");
        }
    }

    #[test]
    fn error_response_uses_envelope_shape() {
        let err = AppError::NotFound("Driver with id 5 does not exist".into());
        let response = err.to_http_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
