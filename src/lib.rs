//! loanflow
//!
//! Motor del wizard de solicitud de préstamo en cinco pasos:
//! - `loan_domain`: modelo, reglas de validación y chequeo de asequibilidad.
//! - `loan_core`: store del formulario, flujo de envío y guard de navegación.
//! - `loan_persistence`: slot y registro de solicitudes en archivos.
//!
//! Este crate los re-exporta y agrega lo que necesitan los binarios:
//! `AppError`, `AppConfig` y la inicialización de logs.

pub mod config;
pub mod errors;
pub mod telemetry;

pub use config::AppConfig;
pub use errors::AppError;
pub use loan_core;
pub use loan_domain;
pub use loan_persistence;

use loan_core::{HistoryNavigator, LoanForm, LoanWizard};
use loan_persistence::{FileLoanService, FileSlot};

/// Wizard sobre los backends en archivo, en el estado guardado.
pub type FileWizard = LoanWizard<FileSlot, FileLoanService, HistoryNavigator>;

/// Abre el wizard con el slot y el registro que indica `config`.
pub fn open_file_wizard(config: &AppConfig) -> FileWizard {
    let form = LoanForm::open(FileSlot::from_config(&config.storage),
                              FileLoanService::from_config(&config.storage),
                              HistoryNavigator::new());
    LoanWizard::new(form)
}
