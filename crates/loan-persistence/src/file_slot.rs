use std::path::{Path, PathBuf};

use log::debug;
use loan_core::{DurableSlot, SlotError};

use crate::config::StorageConfig;
use crate::fs_util::{read_optional, remove_optional, write_atomic};

/// Slot durable en `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = dir.as_ref().join(format!("{name}.json"));
        Self { name, path }
    }

    pub fn from_config(config: &StorageConfig) -> Self { Self::new(&config.state_dir, config.slot_name.clone()) }

    pub fn path(&self) -> &Path { &self.path }
}

impl DurableSlot for FileSlot {
    fn name(&self) -> &str { &self.name }

    fn read(&self) -> Result<Option<String>, SlotError> { Ok(read_optional(&self.path)?) }

    fn write(&mut self, contents: &str) -> Result<(), SlotError> {
        write_atomic(&self.path, contents)?;
        debug!("wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SlotError> { Ok(remove_optional(&self.path)?) }
}
