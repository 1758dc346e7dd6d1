use loan_core::{ServiceError, StoreError, WizardError};
use loan_domain::{AffordabilityError, ValidationErrors};
use loan_persistence::PersistenceError;
use thiserror::Error;

/// Error unificado para binarios. Cada variante tiene su código de salida.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("uso inválido: {0}")]
    Usage(String),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Affordability(#[from] AffordabilityError),
    #[error("{0}")]
    Submission(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 2 uso, 3 rechazo de validación o asequibilidad, 4 falla remota,
    /// 5 almacenamiento.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) | AppError::Json(_) => 2,
            AppError::Validation(_) | AppError::Affordability(_) => 3,
            AppError::Submission(_) => 4,
            AppError::Store(_) | AppError::Persistence(_) => 5,
        }
    }
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::Validation(e) => AppError::Validation(e),
            WizardError::Affordability(e) => AppError::Affordability(e),
            WizardError::Submission(message) => AppError::Submission(message),
            WizardError::Store(e) => AppError::Store(e),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self { AppError::Submission(err.to_string()) }
}
