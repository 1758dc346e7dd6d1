//! Errores de persistencia.
//! Mapea errores de IO / JSON a variantes semánticas y de ahí a los errores
//! que entienden el store y el flujo de envío.

use std::io;
use std::path::Path;

use loan_core::{ServiceError, SlotError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error on {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("corrupt data in {path}: {reason}")]
    Corrupt { path: String, reason: String },
    #[error("404 Not Found ({0})")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PersistenceError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.display().to_string(),
                   source }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self { Self::Serialization(err.to_string()) }
}

impl From<PersistenceError> for SlotError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Io { .. } => SlotError::Io(err.to_string()),
            other => SlotError::Unavailable(other.to_string()),
        }
    }
}

/// Convierte una falla de persistencia en la falla remota de la operación.
pub(crate) fn service_error(op: fn(String) -> ServiceError) -> impl Fn(PersistenceError) -> ServiceError {
    move |err| op(err.to_string())
}
