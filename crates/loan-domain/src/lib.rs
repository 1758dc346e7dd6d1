//! loan-domain: modelo y reglas de validación de la solicitud de préstamo.
//!
//! Este crate es puro (sin IO) y provee:
//! - `model`: secciones tipadas, el agregado parcial `ApplicationDraft` y el
//!   agregado completo `CompleteApplication`.
//! - `validation`: un validador por sección más el validador combinado que
//!   añade las reglas entre secciones (sólo al finalizar).
//! - `affordability`: chequeo de asequibilidad del paso 4 (fuera del schema).
//! - `age`: cálculo de edad en años completos.

pub mod affordability;
pub mod age;
pub mod error;
pub mod model;
pub mod validation;

pub use affordability::{check_affordability, AffordabilityError, RecoveryAction};
pub use error::DomainError;
pub use model::{ApplicationDraft, CompleteApplication, ContactDetails, Finalization, FinancialInformation, LoanRequest,
                PersonalInformation, SectionKind};
pub use validation::{assemble_application, validate_application, validate_contact_details, validate_finalization,
                     validate_financial_information, validate_loan_request, validate_personal_information,
                     validate_section, FieldIssue, ValidationContext, ValidationErrors};
