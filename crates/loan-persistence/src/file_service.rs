use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use log::debug;
use loan_core::{LoanService, ServiceError};
use loan_domain::ApplicationDraft;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::{service_error, PersistenceError};
use crate::fs_util::{read_optional, write_atomic};

type Records = IndexMap<String, ApplicationDraft>;

/// Registro de solicitudes en un archivo JSON (`id -> registro`, en orden de
/// creación). `create` asigna un uuid v4, `update` hace merge shallow y
/// `get_by_id` devuelve el registro guardado.
#[derive(Debug)]
pub struct FileLoanService {
    path: PathBuf,
    // serializa load/modify/save dentro del proceso
    lock: Mutex<()>,
}

impl FileLoanService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(),
               lock: Mutex::new(()) }
    }

    pub fn from_config(config: &StorageConfig) -> Self { Self::new(config.records_path()) }

    pub fn path(&self) -> &Path { &self.path }

    fn load(&self) -> Result<Records, PersistenceError> {
        match read_optional(&self.path)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(|e| PersistenceError::Corrupt { path: self.path.display().to_string(),
                                                                                   reason: e.to_string() })
            }
            _ => Ok(Records::new()),
        }
    }

    fn save(&self, records: &Records) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(records)?;
        write_atomic(&self.path, &raw)
    }

    /// Todos los registros, en orden de creación.
    pub async fn list(&self) -> Result<Vec<ApplicationDraft>, PersistenceError> {
        let _guard = self.lock.lock().await;
        Ok(self.load()?.into_values().collect())
    }
}

#[async_trait]
impl LoanService for FileLoanService {
    async fn create(&self, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError> {
        let _guard = self.lock.lock().await;
        let to_service = service_error(ServiceError::Create);
        let mut records = self.load().map_err(&to_service)?;
        let id = Uuid::new_v4().to_string();
        let record = ApplicationDraft { id: Some(id.clone()),
                                        ..application };
        records.insert(id.clone(), record.clone());
        self.save(&records).map_err(&to_service)?;
        debug!("created loan application {id} in {}", self.path.display());
        Ok(record)
    }

    async fn update(&self, id: &str, application: ApplicationDraft) -> Result<ApplicationDraft, ServiceError> {
        let _guard = self.lock.lock().await;
        let to_service = service_error(ServiceError::Update);
        let mut records = self.load().map_err(&to_service)?;
        let record = records.get_mut(id)
                            .ok_or_else(|| to_service(PersistenceError::NotFound(id.to_string())))?;
        record.merge(application);
        record.id = Some(id.to_string());
        let updated = record.clone();
        self.save(&records).map_err(&to_service)?;
        debug!("patched loan application {id}");
        Ok(updated)
    }

    async fn get_by_id(&self, id: &str) -> Result<ApplicationDraft, ServiceError> {
        let _guard = self.lock.lock().await;
        let to_service = service_error(ServiceError::Fetch);
        let mut records = self.load().map_err(&to_service)?;
        records.swap_remove(id)
               .ok_or_else(|| to_service(PersistenceError::NotFound(id.to_string())))
    }
}
