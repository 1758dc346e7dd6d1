//! Contrato con el backend de registros de solicitudes.

mod memory;

use async_trait::async_trait;
use loan_domain::ApplicationDraft;
use thiserror::Error;

pub use memory::InMemoryLoanService;

/// Fallas remotas. El `Display` es el mensaje que ve el usuario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Failed to create loan application: {0}")] Create(String),
    #[error("Failed to update loan application: {0}")] Update(String),
    #[error("Failed to fetch loan application: {0}")] Fetch(String),
    #[error("{0}")] Other(String),
}

/// Servicio remoto de registros (create / patch / get).
#[async_trait]
pub trait LoanService {
    /// Crea un registro nuevo; la respuesta trae el identificador asignado.
    async fn create(&self, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError>;
    /// Patch parcial sobre un registro existente.
    async fn update(&self, id: &str, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<ApplicationDraft, ServiceError>;
}
