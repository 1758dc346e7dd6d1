//! Wizard completo: validación del paso, reglas extra de los pasos 4 y 5,
//! envío y navegación guardada.

use log::warn;
use loan_domain::{assemble_application, check_affordability, validate_application, validate_financial_information,
                  validate_section, ApplicationDraft, RecoveryAction, SectionKind, ValidationContext, ValidationErrors};
use serde_json::Value;

use crate::constants::GENERIC_SUBMISSION_ERROR;
use crate::errors::WizardError;
use crate::navigation::{guard, GuardDecision, Navigator, Route, WizardStep};
use crate::service::LoanService;
use crate::store::DurableSlot;
use crate::workflow::{LoanForm, SubmissionStatus};

pub struct LoanWizard<S, L, N>
    where S: DurableSlot,
          L: LoanService,
          N: Navigator
{
    form: LoanForm<S, L, N>,
    context: Option<ValidationContext>,
}

impl<S, L, N> LoanWizard<S, L, N>
    where S: DurableSlot,
          L: LoanService,
          N: Navigator
{
    pub fn new(form: LoanForm<S, L, N>) -> Self { Self { form, context: None } }

    /// Fija la fecha de referencia para las reglas de edad.
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn form(&self) -> &LoanForm<S, L, N> { &self.form }

    pub fn form_mut(&mut self) -> &mut LoanForm<S, L, N> { &mut self.form }

    fn context(&self) -> ValidationContext { self.context.unwrap_or_else(ValidationContext::today) }

    /// Consulta el guard y navega a donde indique.
    pub fn enter(&mut self, path: &str) -> GuardDecision {
        let decision = guard(path, self.form.form_data());
        self.form.navigate(decision.route());
        decision
    }

    /// Valida el payload de un paso sin enviarlo.
    pub fn validate(&self, step: WizardStep, candidate: &Value) -> Result<ApplicationDraft, ValidationErrors> {
        validate_section(step.section(), candidate, &self.context())
    }

    /// Valida, aplica las reglas del paso y envía. Devuelve la ruta a la que
    /// se navegó.
    ///
    /// - Paso 4: si el préstamo guardado no es asequible, no se envía nada.
    /// - Paso 5: el draft completo (con la confirmación) debe pasar la
    ///   validación combinada.
    pub async fn submit(&mut self, step: WizardStep, candidate: &Value) -> Result<Route, WizardError> {
        let ctx = self.context();
        let patch = match step.section() {
            SectionKind::FinancialInformation => {
                let financial = validate_financial_information(candidate, &ctx)?;
                let draft = self.form.form_data();
                if let Err(e) = check_affordability(draft.loan_amount, draft.terms, &financial) {
                    warn!("loan not affordable: payment {:.2}, disposable income {:.2}",
                          e.monthly_payment,
                          e.disposable_income);
                    return Err(e.into());
                }
                ApplicationDraft::from(financial)
            }
            SectionKind::Finalization => {
                let patch = validate_section(SectionKind::Finalization, candidate, &ctx)?;
                let whole = self.form.form_data().merged(patch.clone());
                validate_application(&assemble_application(&whole), &ctx)?;
                patch
            }
            section => validate_section(section, candidate, &ctx)?,
        };

        match self.form.submit_step(step, patch).await {
            SubmissionStatus::Succeeded => Ok(self.form.current_route()),
            _ => {
                let message = self.form.error().unwrap_or(GENERIC_SUBMISSION_ERROR).to_string();
                Err(WizardError::Submission(message))
            }
        }
    }

    /// Aplica una salida ofrecida tras un rechazo por asequibilidad.
    pub fn recover(&mut self, action: RecoveryAction) -> Result<Route, WizardError> {
        match action {
            RecoveryAction::ReduceLoanAmount => {
                let route = Route::Step(WizardStep::from(SectionKind::LoanRequest));
                self.form.navigate(route);
                Ok(route)
            }
            RecoveryAction::StartOver => {
                self.form.reset()?;
                Ok(self.form.current_route())
            }
        }
    }
}
