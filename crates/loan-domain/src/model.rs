//! Modelo de la solicitud de préstamo.
//!
//! La solicitud se divide en cinco secciones, una por paso del wizard:
//! datos personales, contacto, préstamo, finanzas y confirmación. Las
//! secciones tipadas sólo existen después de validar; mientras el usuario
//! avanza, el estado vive en `ApplicationDraft`, donde todo es opcional.
//!
//! Los nombres en JSON son camelCase (`loanAmount`, `hasMortgage`, ...), los
//! mismos que usa el backend de registros.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Sección lógica de la solicitud. Cada una corresponde 1:1 con un paso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    PersonalInformation,
    ContactDetails,
    LoanRequest,
    FinancialInformation,
    Finalization,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [SectionKind::PersonalInformation,
                                       SectionKind::ContactDetails,
                                       SectionKind::LoanRequest,
                                       SectionKind::FinancialInformation,
                                       SectionKind::Finalization];

    /// Clave de la sección dentro del agregado combinado.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::PersonalInformation => "personalInformation",
            SectionKind::ContactDetails => "contactDetails",
            SectionKind::LoanRequest => "loanRequest",
            SectionKind::FinancialInformation => "financialInformation",
            SectionKind::Finalization => "finalization",
        }
    }

    /// Número de paso (1-indexado).
    pub fn step_number(self) -> u8 {
        match self {
            SectionKind::PersonalInformation => 1,
            SectionKind::ContactDetails => 2,
            SectionKind::LoanRequest => 3,
            SectionKind::FinancialInformation => 4,
            SectionKind::Finalization => 5,
        }
    }

    pub fn from_step_number(step: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.step_number() == step)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInformation {
    pub first_name: String,
    pub last_name: String,
    /// Fecha `YYYY-MM-DD` tal como la ingresó el usuario.
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub loan_amount: f64,
    pub upfront_payment: f64,
    /// Plazo en meses.
    pub terms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInformation {
    pub monthly_salary: f64,
    pub has_additional_income: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_income: Option<f64>,
    pub has_mortgage: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<f64>,
    pub has_other_credits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_credits: Option<f64>,
}

impl FinancialInformation {
    /// Ingreso neto mensual: salario + ingreso adicional activo - hipoteca
    /// activa - otros créditos activos. Un ítem cuyo flag está apagado no
    /// cuenta aunque tenga monto.
    pub fn monthly_net_income(&self) -> f64 {
        self.monthly_salary + active(self.has_additional_income, self.additional_income)
        - active(self.has_mortgage, self.mortgage)
        - active(self.has_other_credits, self.other_credits)
    }
}

fn active(enabled: bool, amount: Option<f64>) -> f64 {
    if enabled {
        amount.unwrap_or(0.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finalization {
    pub confirmed: bool,
}

/// Las cinco secciones validadas juntas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteApplication {
    pub personal_information: PersonalInformation,
    pub contact_details: ContactDetails,
    pub loan_request: LoanRequest,
    pub financial_information: FinancialInformation,
    pub finalization: Finalization,
}

/// Declara el agregado parcial: cada campo es `Option`, se omite en JSON
/// cuando falta, y `overlay` aplica la superposición shallow (los campos presentes
/// del parche reemplazan a los actuales).
macro_rules! draft_struct {
    ($(#[$meta:meta])* pub struct $name:ident { $($(#[$fmeta:meta])* $field:ident : $ty:ty),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Superposición shallow: los campos presentes en `patch` ganan.
            fn overlay(&mut self, patch: $name) {
                $(
                    if patch.$field.is_some() {
                        self.$field = patch.$field;
                    }
                )+
            }

            /// Cantidad de campos presentes.
            pub fn field_count(&self) -> usize {
                0 $(+ usize::from(self.$field.is_some()))+
            }
        }
    };
}

draft_struct! {
    /// Solicitud parcial en curso. Empieza vacía y crece con cada paso.
    pub struct ApplicationDraft {
        /// Identificador remoto; ausente hasta el primer create exitoso.
        id: String,
        first_name: String,
        last_name: String,
        date_of_birth: String,
        email: String,
        phone: String,
        loan_amount: f64,
        upfront_payment: f64,
        terms: u32,
        monthly_salary: f64,
        has_additional_income: bool,
        additional_income: f64,
        has_mortgage: bool,
        mortgage: f64,
        has_other_credits: bool,
        other_credits: f64,
        confirmed: bool,
    }
}

impl ApplicationDraft {
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Merge shallow: los campos presentes en `patch` ganan. Un monto cuyo
    /// flag queda apagado se descarta.
    pub fn merge(&mut self, patch: ApplicationDraft) {
        self.overlay(patch);
        self.drop_inactive_amounts();
    }

    /// Borra los montos financieros cuyo flag está explícitamente apagado.
    pub fn drop_inactive_amounts(&mut self) {
        let pairs = [(self.has_additional_income, &mut self.additional_income),
                     (self.has_mortgage, &mut self.mortgage),
                     (self.has_other_credits, &mut self.other_credits)];
        for (flag, amount) in pairs {
            if flag == Some(false) {
                *amount = None;
            }
        }
    }

    /// Merge que devuelve un nuevo draft sin tocar `self`.
    pub fn merged(&self, patch: ApplicationDraft) -> ApplicationDraft {
        let mut out = self.clone();
        out.merge(patch);
        out
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<PersonalInformation> for ApplicationDraft {
    fn from(s: PersonalInformation) -> Self {
        Self { first_name: Some(s.first_name),
               last_name: Some(s.last_name),
               date_of_birth: Some(s.date_of_birth),
               ..Default::default() }
    }
}

impl From<ContactDetails> for ApplicationDraft {
    fn from(s: ContactDetails) -> Self {
        Self { email: Some(s.email),
               phone: Some(s.phone),
               ..Default::default() }
    }
}

impl From<LoanRequest> for ApplicationDraft {
    fn from(s: LoanRequest) -> Self {
        Self { loan_amount: Some(s.loan_amount),
               upfront_payment: Some(s.upfront_payment),
               terms: Some(s.terms),
               ..Default::default() }
    }
}

impl From<FinancialInformation> for ApplicationDraft {
    fn from(s: FinancialInformation) -> Self {
        Self { monthly_salary: Some(s.monthly_salary),
               has_additional_income: Some(s.has_additional_income),
               additional_income: s.additional_income,
               has_mortgage: Some(s.has_mortgage),
               mortgage: s.mortgage,
               has_other_credits: Some(s.has_other_credits),
               other_credits: s.other_credits,
               ..Default::default() }
    }
}

impl From<Finalization> for ApplicationDraft {
    fn from(s: Finalization) -> Self {
        Self { confirmed: Some(s.confirmed),
               ..Default::default() }
    }
}

impl From<CompleteApplication> for ApplicationDraft {
    fn from(app: CompleteApplication) -> Self {
        let mut draft = ApplicationDraft::from(app.personal_information);
        draft.merge(app.contact_details.into());
        draft.merge(app.loan_request.into());
        draft.merge(app.financial_information.into());
        draft.merge(app.finalization.into());
        draft
    }
}
