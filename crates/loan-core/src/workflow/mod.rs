//! Flujo de envío por paso.

mod form;
mod status;

pub use form::LoanForm;
pub use status::SubmissionStatus;
