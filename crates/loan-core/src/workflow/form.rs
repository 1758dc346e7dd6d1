use log::{info, warn};
use loan_domain::ApplicationDraft;

use super::SubmissionStatus;
use crate::constants::GENERIC_SUBMISSION_ERROR;
use crate::errors::StoreError;
use crate::navigation::{Navigator, Route, WizardStep};
use crate::service::{LoanService, ServiceError};
use crate::store::{DurableSlot, FormStateStore};

/// Orquesta el envío de cada paso: merge, llamada remota, persistencia local y
/// navegación.
///
/// El primer envío crea el registro remoto (con `confirmed = false`) y adopta
/// el id devuelto; los siguientes hacen patch con el draft completo. Una falla
/// remota deja el store intacto y la navegación donde estaba.
pub struct LoanForm<S, L, N>
    where S: DurableSlot,
          L: LoanService,
          N: Navigator
{
    store: FormStateStore<S>,
    service: L,
    navigator: N,
    status: SubmissionStatus,
    error: Option<String>,
}

impl<S, L, N> LoanForm<S, L, N>
    where S: DurableSlot,
          L: LoanService,
          N: Navigator
{
    pub fn new(store: FormStateStore<S>, service: L, navigator: N) -> Self {
        Self { store,
               service,
               navigator,
               status: SubmissionStatus::Idle,
               error: None }
    }

    /// Abre el store sobre `slot` (restaurando lo guardado) y arma el flujo.
    pub fn open(slot: S, service: L, navigator: N) -> Self { Self::new(FormStateStore::open(slot), service, navigator) }

    pub fn form_data(&self) -> &ApplicationDraft { self.store.state() }

    pub fn status(&self) -> SubmissionStatus { self.status }

    pub fn is_submitting(&self) -> bool { self.status == SubmissionStatus::Submitting }

    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    pub fn current_route(&self) -> Route { self.navigator.current() }

    pub fn store(&self) -> &FormStateStore<S> { &self.store }

    pub fn service(&self) -> &L { &self.service }

    pub fn navigator(&self) -> &N { &self.navigator }

    pub fn navigate(&mut self, route: Route) { self.navigator.navigate(route) }

    /// Merge local sin llamada remota. Limpia el error visible.
    pub fn update(&mut self, patch: ApplicationDraft) -> Result<(), StoreError> {
        self.error = None;
        self.store.update(patch)
    }

    /// Envía los datos (ya validados) del paso `step`.
    ///
    /// Devuelve el estado final (`Succeeded` o `Failed`); en caso de falla el
    /// mensaje queda disponible en `error()`.
    pub async fn submit_step(&mut self, step: WizardStep, data: ApplicationDraft) -> SubmissionStatus {
        self.error = None;
        self.status = SubmissionStatus::Submitting;
        info!("submitting {step}");

        let merged = self.store.state().merged(data.clone());
        let assigned_id = match merged.id.clone() {
            Some(id) => {
                let patched = self.service.update(&id, merged).await;
                if let Err(e) = patched {
                    return self.fail(user_message(&e));
                }
                None
            }
            None => {
                let payload = ApplicationDraft { confirmed: Some(false),
                                                 ..merged };
                let created = self.service.create(payload).await;
                match created.and_then(|r| r.id.ok_or_else(|| ServiceError::Create("response carried no identifier".into()))) {
                    Ok(id) => Some(id),
                    Err(e) => return self.fail(user_message(&e)),
                }
            }
        };

        let mut commit = data;
        if let Some(id) = assigned_id {
            info!("loan application created with id {id}");
            commit.id = Some(id);
        }
        if let Err(e) = self.store.update(commit) {
            return self.fail(e.to_string());
        }

        self.navigator.navigate(step.next_route());
        self.status = SubmissionStatus::Succeeded;
        self.status
    }

    /// Limpia store y errores y vuelve al paso 1.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.reset()?;
        self.error = None;
        self.status = SubmissionStatus::Idle;
        self.navigator.navigate(Route::first());
        Ok(())
    }

    fn fail(&mut self, message: String) -> SubmissionStatus {
        warn!("submission failed: {message}");
        self.error = Some(message);
        self.status = SubmissionStatus::Failed;
        self.status
    }
}

fn user_message(e: &ServiceError) -> String {
    let message = e.to_string();
    if message.trim().is_empty() {
        GENERIC_SUBMISSION_ERROR.to_string()
    } else {
        message
    }
}
