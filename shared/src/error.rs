use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("invalid booking date: {0}")]
    InvalidBookingDate(String),
    #[error("membership plan not found: {0}")]
    InvalidMembership(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("authentication required")]
    UnauthenticatedError,
    #[error("invalid password")]
    InvalidPassword,
    #[error("operation not permitted")]
    ForbiddenOperation,
    #[error("failed to execute query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected")]
    NoRowsAffectedError,
    #[error("failed to run transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("database query error")]
    DbQueryError(#[source] sqlx::Error),
    #[error("failed to hash password")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("failed to create token")]
    TokenCreationError(#[source] jsonwebtoken::errors::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_)
            | AppError::InvalidBookingDate(_)
            | AppError::InvalidMembership(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailAlreadyExists => StatusCode::CONFLICT,
            AppError::UnauthenticatedError | AppError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError
            | AppError::TransactionError(_)
            | AppError::DbQueryError(_)
            | AppError::BcryptError(_)
            | AppError::TokenCreationError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        }

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
