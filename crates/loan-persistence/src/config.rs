//! Configuración de almacenamiento desde variables de entorno.
//! `LOANFLOW_STATE_DIR` (default `.loanflow`) y `LOANFLOW_SLOT_NAME`
//! (default `loan-application-data`).

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use loan_core::constants::STORAGE_KEY;
use once_cell::sync::Lazy;

pub const STATE_DIR_VAR: &str = "LOANFLOW_STATE_DIR";
pub const SLOT_NAME_VAR: &str = "LOANFLOW_SLOT_NAME";
pub const DEFAULT_STATE_DIR: &str = ".loanflow";
/// Archivo con los registros remotos simulados.
pub const RECORDS_FILE: &str = "entities.json";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub state_dir: PathBuf,
    pub slot_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { state_dir: PathBuf::from(DEFAULT_STATE_DIR),
               slot_name: STORAGE_KEY.to_string() }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    /// Valores vacíos cuentan como ausentes.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self { state_dir: get(STATE_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.state_dir),
               slot_name: get(SLOT_NAME_VAR).unwrap_or(defaults.slot_name) }
    }

    pub fn slot_path(&self) -> PathBuf { self.state_dir.join(format!("{}.json", self.slot_name)) }

    pub fn records_path(&self) -> PathBuf { self.state_dir.join(RECORDS_FILE) }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
