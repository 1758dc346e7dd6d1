use std::sync::{Arc, Mutex};

use crate::errors::SlotError;

/// Medio durable de un solo valor (el draft serializado).
///
/// Sobrevive reinicios del proceso cuando la implementación lo permite; la de
/// memoria sólo sobrevive mientras exista algún clon.
pub trait DurableSlot {
    /// Nombre del slot (para logs).
    fn name(&self) -> &str;
    /// Contenido actual, `None` si nunca se escribió o fue borrado.
    fn read(&self) -> Result<Option<String>, SlotError>;
    fn write(&mut self, contents: &str) -> Result<(), SlotError>;
    fn clear(&mut self) -> Result<(), SlotError>;
}

/// Slot en memoria. Los clones comparten el mismo contenido, así un segundo
/// `FormStateStore` abierto sobre un clon ve lo que escribió el primero.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    name: String,
    inner: Arc<Mutex<Option<String>>>,
}

impl InMemorySlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               inner: Arc::default() }
    }

    /// Slot con contenido inicial (útil para simular datos previos o corruptos).
    pub fn with_contents(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { name: name.into(),
               inner: Arc::new(Mutex::new(Some(contents.into()))) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, SlotError> {
        self.inner.lock().map_err(|_| SlotError::Unavailable(format!("slot '{}' lock poisoned", self.name)))
    }
}

impl DurableSlot for InMemorySlot {
    fn name(&self) -> &str { &self.name }

    fn read(&self) -> Result<Option<String>, SlotError> { Ok(self.lock()?.clone()) }

    fn write(&mut self, contents: &str) -> Result<(), SlotError> {
        *self.lock()? = Some(contents.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        *self.lock()? = None;
        Ok(())
    }
}
