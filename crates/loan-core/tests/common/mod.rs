#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use loan_core::{DurableSlot, LoanService, ServiceError, SlotError};
use loan_domain::{ApplicationDraft, ValidationContext};
use serde_json::{json, Value};

/// Llamada registrada por `ScriptedService`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(ApplicationDraft),
    Update(String, ApplicationDraft),
    Get(String),
}

/// Doble del servicio remoto: registra llamadas y responde según un guion.
/// Sin guion, `create` asigna `app-1` y `update` devuelve lo recibido.
#[derive(Default)]
pub struct ScriptedService {
    calls: Mutex<Vec<Call>>,
    script: Mutex<VecDeque<Result<ApplicationDraft, ServiceError>>>,
}

impl ScriptedService {
    pub fn new() -> Self { Self::default() }

    pub fn then(self, response: Result<ApplicationDraft, ServiceError>) -> Self {
        self.script.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }

    fn next(&self) -> Option<Result<ApplicationDraft, ServiceError>> { self.script.lock().unwrap().pop_front() }
}

#[async_trait]
impl LoanService for ScriptedService {
    async fn create(&self, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError> {
        self.calls.lock().unwrap().push(Call::Create(application.clone()));
        self.next().unwrap_or_else(|| {
                       Ok(ApplicationDraft { id: Some("app-1".into()),
                                             ..application })
                   })
    }

    async fn update(&self, id: &str, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError> {
        self.calls.lock().unwrap().push(Call::Update(id.to_string(), application.clone()));
        self.next().unwrap_or(Ok(application))
    }

    async fn get_by_id(&self, id: &str) -> Result<ApplicationDraft, ServiceError> {
        self.calls.lock().unwrap().push(Call::Get(id.to_string()));
        self.next().unwrap_or_else(|| Err(ServiceError::Fetch("not scripted".into())))
    }
}

/// Slot que lee bien pero rechaza toda escritura.
#[derive(Default)]
pub struct ReadOnlySlot {
    pub contents: Option<String>,
}

impl DurableSlot for ReadOnlySlot {
    fn name(&self) -> &str { "read-only" }

    fn read(&self) -> Result<Option<String>, SlotError> { Ok(self.contents.clone()) }

    fn write(&mut self, _contents: &str) -> Result<(), SlotError> { Err(SlotError::Io("disk full".into())) }

    fn clear(&mut self) -> Result<(), SlotError> { Err(SlotError::Io("disk full".into())) }
}

pub fn ctx() -> ValidationContext { ValidationContext::at(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()) }

pub fn personal_patch() -> ApplicationDraft {
    ApplicationDraft { first_name: Some("Anna".into()),
                       last_name: Some("Schmidt".into()),
                       date_of_birth: Some("1990-01-01".into()),
                       ..Default::default() }
}

pub fn contact_patch() -> ApplicationDraft {
    ApplicationDraft { email: Some("anna@example.com".into()),
                       phone: Some("+491701234567".into()),
                       ..Default::default() }
}

/// Payloads válidos de los cinco pasos, en orden.
pub fn step_payloads(dob: &str, terms: u32) -> Vec<Value> {
    vec![json!({"firstName": "Anna", "lastName": "Schmidt", "dateOfBirth": dob}),
         json!({"email": "anna@example.com", "phone": "+491701234567"}),
         json!({"loanAmount": 20000, "upfrontPayment": 1000, "terms": terms}),
         json!({"monthlySalary": 3000, "hasAdditionalIncome": false, "hasMortgage": false, "hasOtherCredits": false}),
         json!({"confirmed": true})]
}
