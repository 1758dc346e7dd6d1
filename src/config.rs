//! Configuración central de la aplicación.
//! Junta la configuración de almacenamiento (`loan-persistence`) con el filtro
//! de logs (`LOANFLOW_LOG`, default `info`).

use std::env;

use loan_persistence::{init_dotenv, StorageConfig};

pub const LOG_FILTER_VAR: &str = "LOANFLOW_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directorio de estado y nombre del slot.
    pub storage: StorageConfig,
    /// Directiva de `EnvFilter` (p. ej. `info,loan_core=debug`).
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { storage: StorageConfig::default(),
               log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup(LOG_FILTER_VAR).filter(|v| !v.trim().is_empty())
                                               .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { storage: StorageConfig::from_lookup(&lookup),
               log_filter }
    }
}
