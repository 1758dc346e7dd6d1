//! Conjunto de reglas de validación.
//!
//! Dos pasadas explícitas:
//! 1. Cada sección se valida por separado (campos, luego refinamiento dentro
//!    de la sección). Esto permite validar un paso sin el agregado completo.
//! 2. `validate_application` corre las cinco secciones, prefija sus rutas con
//!    la clave de la sección y, si todas quedaron parseadas, agrega las reglas
//!    entre secciones (`combined`).

mod combined;
pub mod conditional;
mod fields;
pub mod messages;
mod sections;
mod types;

use serde_json::{json, Map, Value};

use crate::model::{ApplicationDraft, CompleteApplication, ContactDetails, Finalization, FinancialInformation,
                   LoanRequest, PersonalInformation, SectionKind};
use types::Checked;

pub use combined::{LOAN_AMOUNT_PATH, TERMS_PATH};
pub use types::{FieldIssue, ValidationContext, ValidationErrors};

pub fn validate_personal_information(candidate: &Value,
                                     ctx: &ValidationContext)
                                     -> Result<PersonalInformation, ValidationErrors> {
    sections::check_personal_information(candidate, ctx).into_result()
}

pub fn validate_contact_details(candidate: &Value, ctx: &ValidationContext) -> Result<ContactDetails, ValidationErrors> {
    sections::check_contact_details(candidate, ctx).into_result()
}

pub fn validate_loan_request(candidate: &Value, ctx: &ValidationContext) -> Result<LoanRequest, ValidationErrors> {
    sections::check_loan_request(candidate, ctx).into_result()
}

pub fn validate_financial_information(candidate: &Value,
                                      ctx: &ValidationContext)
                                      -> Result<FinancialInformation, ValidationErrors> {
    sections::check_financial_information(candidate, ctx).into_result()
}

pub fn validate_finalization(candidate: &Value, ctx: &ValidationContext) -> Result<Finalization, ValidationErrors> {
    sections::check_finalization(candidate, ctx).into_result()
}

/// Valida la sección de un paso y la devuelve como parche del draft.
pub fn validate_section(kind: SectionKind,
                        candidate: &Value,
                        ctx: &ValidationContext)
                        -> Result<ApplicationDraft, ValidationErrors> {
    match kind {
        SectionKind::PersonalInformation => validate_personal_information(candidate, ctx).map(Into::into),
        SectionKind::ContactDetails => validate_contact_details(candidate, ctx).map(Into::into),
        SectionKind::LoanRequest => validate_loan_request(candidate, ctx).map(Into::into),
        SectionKind::FinancialInformation => validate_financial_information(candidate, ctx).map(Into::into),
        SectionKind::Finalization => validate_finalization(candidate, ctx).map(Into::into),
    }
}

/// Validador combinado sobre `{personalInformation, contactDetails,
/// loanRequest, financialInformation, finalization}`.
pub fn validate_application(candidate: &Value, ctx: &ValidationContext) -> Result<CompleteApplication, ValidationErrors> {
    let Some(object) = candidate.as_object() else {
        return Err(ValidationErrors::single("", "Expected object"));
    };
    let mut issues = ValidationErrors::new();

    let personal = section(object, SectionKind::PersonalInformation, &mut issues, |v| {
                       sections::check_personal_information(v, ctx)
                   });
    let contact = section(object, SectionKind::ContactDetails, &mut issues, |v| {
                      sections::check_contact_details(v, ctx)
                  });
    let loan = section(object, SectionKind::LoanRequest, &mut issues, |v| sections::check_loan_request(v, ctx));
    let financial = section(object, SectionKind::FinancialInformation, &mut issues, |v| {
                        sections::check_financial_information(v, ctx)
                    });
    let finalization = section(object, SectionKind::Finalization, &mut issues, |v| sections::check_finalization(v, ctx));

    if let (Some(p), Some(c), Some(l), Some(f), Some(z)) = (personal, contact, loan, financial, finalization) {
        let app = CompleteApplication { personal_information: p,
                                        contact_details: c,
                                        loan_request: l,
                                        financial_information: f,
                                        finalization: z };
        combined::refine_application(&app, ctx, &mut issues);
        if issues.is_empty() {
            return Ok(app);
        }
    }
    Err(issues)
}

fn section<T>(object: &Map<String, Value>,
              kind: SectionKind,
              issues: &mut ValidationErrors,
              check: impl FnOnce(&Value) -> Checked<T>)
              -> Option<T> {
    match object.get(kind.key()).filter(|v| !v.is_null()) {
        None => {
            issues.push(kind.key(), messages::SECTION_REQUIRED);
            None
        }
        Some(v) => {
            let checked = check(v);
            issues.extend(checked.issues.prefixed(kind.key()));
            checked.value
        }
    }
}

/// Arma el candidato combinado a partir del draft plano. Los campos
/// ausentes quedan en `null` y el validador los reporta como requeridos.
pub fn assemble_application(draft: &ApplicationDraft) -> Value {
    json!({
        "personalInformation": {
            "firstName": draft.first_name,
            "lastName": draft.last_name,
            "dateOfBirth": draft.date_of_birth,
        },
        "contactDetails": {
            "email": draft.email,
            "phone": draft.phone,
        },
        "loanRequest": {
            "loanAmount": draft.loan_amount,
            "upfrontPayment": draft.upfront_payment,
            "terms": draft.terms,
        },
        "financialInformation": {
            "monthlySalary": draft.monthly_salary,
            "hasAdditionalIncome": draft.has_additional_income,
            "additionalIncome": draft.additional_income,
            "hasMortgage": draft.has_mortgage,
            "mortgage": draft.mortgage,
            "hasOtherCredits": draft.has_other_credits,
            "otherCredits": draft.other_credits,
        },
        "finalization": {
            "confirmed": draft.confirmed,
        },
    })
}
