//! loan-core: estado del formulario, flujo de envío y navegación del wizard.
//!
//! Flujo de datos (en un solo sentido):
//! - El paso valida su payload (`loan-domain`) y lo entrega a `LoanForm`.
//! - `LoanForm` fusiona, llama al servicio remoto (create/update), persiste en
//!   el `FormStateStore` y avanza la navegación.
//! - El guard de navegación lee el draft para autorizar la ruta de éxito.
//!
//! `LoanWizard` junta las tres cosas para un paso completo.

pub mod constants;
pub mod errors;
pub mod navigation;
pub mod service;
pub mod store;
pub mod wizard;
pub mod workflow;

pub use errors::{SlotError, StoreError, WizardError};
pub use navigation::{guard, GuardDecision, HistoryNavigator, Navigator, Route, WizardStep};
pub use service::{InMemoryLoanService, LoanService, ServiceError};
pub use store::{DurableSlot, FormStateStore, InMemorySlot};
pub use wizard::LoanWizard;
pub use workflow::{LoanForm, SubmissionStatus};
