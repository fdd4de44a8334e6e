use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::{storage::StorageError, FolioError};

/// Per-field failure reported by request body/query validation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Validation error")]
    Validation(Vec<FieldError>),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(StorageError),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<StorageError> for WebError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::EntityNotFound(msg) => WebError::NotFound(msg),
            StorageError::AlreadyExists(msg) => WebError::BadRequest(msg),
            other => WebError::StorageError(other),
        }
    }
}

impl From<FolioError> for WebError {
    fn from(e: FolioError) -> Self {
        match e {
            FolioError::StorageError(inner) => inner.into(),
            FolioError::WebError(inner) => inner,
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "success": false,
            "message": self.to_string()
        });
        match self {
            WebError::Unauthorized(_) => HttpResponse::Unauthorized().json(body),
            WebError::Forbidden(_) => HttpResponse::Forbidden().json(body),
            WebError::BadRequest(_) => HttpResponse::BadRequest().json(body),
            WebError::NotFound(_) => HttpResponse::NotFound().json(body),
            WebError::Validation(fields) => {
                body["errors"] = json!(fields);
                HttpResponse::BadRequest().json(body)
            }
            WebError::InternalError(_) | WebError::StorageError(_) => {
                // Storage and internal failures must not leak details to clients.
                body["message"] = json!("Internal server error");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}
