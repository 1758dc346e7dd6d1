//! Errores del core.

use loan_domain::{AffordabilityError, DomainError, SectionKind, ValidationErrors};
use thiserror::Error;

use crate::navigation::WizardStep;

/// Fallas del medio durable (lectura, escritura o borrado del slot).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SlotError {
    #[error("slot io error: {0}")] Io(String),
    #[error("slot unavailable: {0}")] Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not persist form state: {0}")] Slot(#[from] SlotError),
    #[error(transparent)] Domain(#[from] DomainError),
}

/// Motivos por los que un paso del wizard no avanza.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("validation failed: {0}")] Validation(#[from] ValidationErrors),
    #[error(transparent)] Affordability(#[from] AffordabilityError),
    #[error("{0}")] Submission(String),
    #[error(transparent)] Store(#[from] StoreError),
}

impl WizardError {
    /// Paso al que conviene volver para corregir el error.
    ///
    /// Sólo aplica a errores de validación del agregado combinado, cuyas rutas
    /// empiezan con la clave de la sección (`loanRequest.terms`).
    pub fn correction_step(&self) -> Option<WizardStep> {
        let WizardError::Validation(errors) = self else {
            return None;
        };
        let first = errors.issues().first()?;
        let key = first.path.split('.').next()?;
        SectionKind::ALL.into_iter()
                        .find(|s| s.key() == key)
                        .map(WizardStep::from)
    }
}
