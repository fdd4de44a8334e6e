pub mod init;
pub mod notify;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use notify::NotifyError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;

pub type FolioResult<T, E = FolioError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type NotifyResult<T, E = NotifyError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum FolioError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("{0}")]
    NotifyError(#[from] NotifyError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<String> for FolioError {
    #[inline]
    fn from(e: String) -> Self {
        FolioError::Msg(e)
    }
}

impl From<&str> for FolioError {
    #[inline]
    fn from(e: &str) -> Self {
        FolioError::Msg(e.to_string())
    }
}

impl From<DbErr> for FolioError {
    #[inline]
    fn from(e: DbErr) -> Self {
        FolioError::StorageError(StorageError::DBError(e))
    }
}
