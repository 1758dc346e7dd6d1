//! Backends durables del wizard: slot en archivo, registro de solicitudes en
//! archivo y configuración desde entorno / `.env`.

pub mod config;
pub mod error;
pub mod file_service;
pub mod file_slot;
mod fs_util;

pub use config::{init_dotenv, StorageConfig};
pub use error::PersistenceError;
pub use file_service::FileLoanService;
pub use file_slot::FileSlot;
