use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("invalid date format: {0}")]
    InvalidDateFormatError(String),
    #[error("email is already in use: {0}")]
    EmailAlreadyExistsError(String),
    #[error("invalid email or password")]
    UnauthenticatedError,
    #[error("failed to run query: {0}")]
    DbQueryError(#[source] sqlx::Error),
    #[error("failed to run query in transaction: {0}")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("transaction failed: {0}")]
    TransactionError(#[source] sqlx::Error),
    #[error("failed to process password: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ValidationError(_)
            | AppError::InvalidDateFormatError(_)
            | AppError::EmailAlreadyExistsError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DbQueryError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::TransactionError(_)
            | AppError::BcryptError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        }

        (status_code, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
