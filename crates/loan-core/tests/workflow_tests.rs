mod common;

use common::{contact_patch, personal_patch, Call, ReadOnlySlot, ScriptedService};
use loan_core::constants::GENERIC_SUBMISSION_ERROR;
use loan_core::{DurableSlot, FormStateStore, HistoryNavigator, InMemorySlot, LoanForm, Navigator, Route, ServiceError,
                SubmissionStatus, WizardStep};
use loan_domain::ApplicationDraft;

fn step(n: u8) -> WizardStep { WizardStep::new(n).unwrap() }

fn form(slot: InMemorySlot, service: ScriptedService) -> LoanForm<InMemorySlot, ScriptedService, HistoryNavigator> {
    LoanForm::open(slot, service, HistoryNavigator::new())
}

#[tokio::test]
async fn first_submission_creates_unconfirmed_record_and_adopts_id() {
    let slot = InMemorySlot::new("loan");
    let mut form = form(slot.clone(), ScriptedService::new());

    let status = form.submit_step(step(1), personal_patch()).await;

    assert_eq!(status, SubmissionStatus::Succeeded);
    assert_eq!(form.service().calls(),
               vec![Call::Create(ApplicationDraft { confirmed: Some(false),
                                                    ..personal_patch() })]);
    assert_eq!(form.form_data().id.as_deref(), Some("app-1"));
    assert_eq!(form.form_data().first_name.as_deref(), Some("Anna"));
    // el flag forzado sólo viaja al servicio
    assert_eq!(form.form_data().confirmed, None);
    assert_eq!(form.current_route().path(), "/loan-application/step2");
    assert!(!form.is_submitting());

    let persisted = ApplicationDraft::from_json(&slot.read().unwrap().unwrap()).unwrap();
    assert_eq!(&persisted, form.form_data());
}

#[tokio::test]
async fn later_submissions_patch_with_the_whole_merged_draft() {
    let mut form = form(InMemorySlot::new("loan"), ScriptedService::new());
    form.submit_step(step(1), personal_patch()).await;
    let status = form.submit_step(step(2), contact_patch()).await;

    assert_eq!(status, SubmissionStatus::Succeeded);
    let calls = form.service().calls();
    assert_eq!(calls.len(), 2);
    let Call::Update(id, body) = &calls[1] else {
        panic!("expected update, got {:?}", calls[1]);
    };
    assert_eq!(id, "app-1");
    assert_eq!(body.first_name.as_deref(), Some("Anna"));
    assert_eq!(body.email.as_deref(), Some("anna@example.com"));
    assert_eq!(body.id.as_deref(), Some("app-1"));
    assert_eq!(form.current_route(), Route::Step(step(3)));
}

#[tokio::test]
async fn remote_failure_keeps_state_and_route() {
    let service = ScriptedService::new().then(Err(ServiceError::Create("503 Service Unavailable".into())));
    let slot = InMemorySlot::new("loan");
    let mut form = form(slot.clone(), service);

    let status = form.submit_step(step(1), personal_patch()).await;

    assert_eq!(status, SubmissionStatus::Failed);
    assert_eq!(form.error(), Some("Failed to create loan application: 503 Service Unavailable"));
    assert!(!form.is_submitting());
    assert!(form.form_data().is_empty());
    assert_eq!(slot.read().unwrap(), None);
    assert_eq!(form.current_route(), Route::first());
    assert_eq!(form.navigator().history().len(), 1);
}

#[tokio::test]
async fn failure_without_message_uses_generic_text() {
    let service = ScriptedService::new().then(Err(ServiceError::Other(String::new())));
    let mut form = form(InMemorySlot::new("loan"), service);
    form.submit_step(step(1), personal_patch()).await;
    assert_eq!(form.error(), Some(GENERIC_SUBMISSION_ERROR));
}

#[tokio::test]
async fn create_response_without_id_is_a_failure() {
    let service = ScriptedService::new().then(Ok(ApplicationDraft::default()));
    let mut form = form(InMemorySlot::new("loan"), service);
    let status = form.submit_step(step(1), personal_patch()).await;
    assert_eq!(status, SubmissionStatus::Failed);
    assert!(form.form_data().id.is_none());
    assert!(form.error().is_some_and(|e| e.starts_with("Failed to create loan application")));
}

#[tokio::test]
async fn retry_after_failure_clears_the_error() {
    let service = ScriptedService::new().then(Err(ServiceError::Create("timeout".into())));
    let mut form = form(InMemorySlot::new("loan"), service);
    form.submit_step(step(1), personal_patch()).await;
    assert!(form.error().is_some());

    let status = form.submit_step(step(1), personal_patch()).await;
    assert_eq!(status, SubmissionStatus::Succeeded);
    assert_eq!(form.error(), None);
}

#[tokio::test]
async fn local_update_clears_error_without_remote_call() {
    let service = ScriptedService::new().then(Err(ServiceError::Create("timeout".into())));
    let mut form = form(InMemorySlot::new("loan"), service);
    form.submit_step(step(1), personal_patch()).await;

    form.update(contact_patch()).unwrap();

    assert_eq!(form.error(), None);
    assert_eq!(form.service().calls().len(), 1);
    assert_eq!(form.form_data().email.as_deref(), Some("anna@example.com"));
}

#[tokio::test]
async fn last_step_navigates_to_success() {
    let mut form = form(InMemorySlot::new("loan"), ScriptedService::new());
    form.update(ApplicationDraft { id: Some("app-9".into()),
                                   ..personal_patch() })
        .unwrap();
    let status = form.submit_step(WizardStep::LAST,
                                  ApplicationDraft { confirmed: Some(true),
                                                     ..Default::default() })
                     .await;
    assert_eq!(status, SubmissionStatus::Succeeded);
    assert_eq!(form.current_route(), Route::Success);
    assert_eq!(form.form_data().confirmed, Some(true));
}

#[tokio::test]
async fn reload_restores_progress_from_the_shared_slot() {
    let slot = InMemorySlot::new("loan");
    let mut first = form(slot.clone(), ScriptedService::new());
    first.submit_step(step(1), personal_patch()).await;
    first.submit_step(step(2), contact_patch()).await;

    let second = form(slot, ScriptedService::new());
    assert_eq!(second.form_data(), first.form_data());
    assert_eq!(second.status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn reset_forgets_everything_and_returns_to_step_one() {
    let slot = InMemorySlot::new("loan");
    let mut form = form(slot.clone(), ScriptedService::new());
    form.submit_step(step(1), personal_patch()).await;
    form.submit_step(step(2), contact_patch()).await;

    form.reset().unwrap();

    assert!(form.form_data().is_empty());
    assert_eq!(slot.read().unwrap(), None);
    assert_eq!(form.current_route(), Route::first());
    assert_eq!(form.status(), SubmissionStatus::Idle);

    // sin id, el próximo envío vuelve a crear
    form.submit_step(step(1), personal_patch()).await;
    assert!(matches!(form.service().calls().last(), Some(Call::Create(_))));
}

#[tokio::test]
async fn local_write_failure_is_reported_and_does_not_advance() {
    let mut form = LoanForm::new(FormStateStore::open(ReadOnlySlot::default()),
                                 ScriptedService::new(),
                                 HistoryNavigator::new());
    let status = form.submit_step(step(1), personal_patch()).await;
    assert_eq!(status, SubmissionStatus::Failed);
    assert!(form.error().is_some_and(|e| e.contains("disk full")));
    assert!(form.form_data().is_empty());
    assert_eq!(form.navigator().current(), Route::first());
}
