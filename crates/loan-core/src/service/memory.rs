use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use loan_domain::ApplicationDraft;
use uuid::Uuid;

use super::{LoanService, ServiceError};

/// Backend en memoria con la semántica del servicio real: `create` asigna un
/// id nuevo, `update` hace merge shallow sobre el registro existente.
#[derive(Debug, Default)]
pub struct InMemoryLoanService {
    records: DashMap<String, ApplicationDraft>,
}

impl InMemoryLoanService {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn record(&self, id: &str) -> Option<ApplicationDraft> { self.records.get(id).map(|r| r.value().clone()) }
}

#[async_trait]
impl LoanService for InMemoryLoanService {
    async fn create(&self, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError> {
        let id = Uuid::new_v4().to_string();
        let record = ApplicationDraft { id: Some(id.clone()),
                                        ..application };
        self.records.insert(id.clone(), record.clone());
        debug!("created loan application {id}");
        Ok(record)
    }

    async fn update(&self, id: &str, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError> {
        let mut entry = self.records
                            .get_mut(id)
                            .ok_or_else(|| ServiceError::Update(format!("404 Not Found ({id})")))?;
        entry.merge(application);
        entry.id = Some(id.to_string());
        debug!("patched loan application {id}");
        Ok(entry.value().clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<ApplicationDraft, ServiceError> {
        self.record(id).ok_or_else(|| ServiceError::Fetch(format!("404 Not Found ({id})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_patch_merges() {
        let svc = InMemoryLoanService::new();
        let created = svc.create(ApplicationDraft { first_name: Some("Anna".into()),
                                                    ..Default::default() })
                         .await
                         .unwrap();
        let id = created.id.clone().unwrap();
        svc.update(&id, ApplicationDraft { email: Some("a@b.de".into()),
                                           ..Default::default() })
           .await
           .unwrap();
        let fetched = svc.get_by_id(&id).await.unwrap();
        assert_eq!(fetched.first_name.as_deref(), Some("Anna"));
        assert_eq!(fetched.email.as_deref(), Some("a@b.de"));
        assert_eq!(svc.len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_fail() {
        let svc = InMemoryLoanService::new();
        let err = svc.update("nope", ApplicationDraft::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to update loan application: 404 Not Found (nope)");
        assert!(svc.get_by_id("nope").await.is_err());
    }
}
