use log::{debug, warn};
use loan_domain::ApplicationDraft;

use super::DurableSlot;
use crate::errors::StoreError;

/// Dueño del draft en curso, con write-through al slot durable.
///
/// Invariante: después de cada `update` o `reset` exitoso, el contenido del
/// slot deserializa exactamente a `state()`. Si la escritura falla, la memoria
/// no cambia.
#[derive(Debug)]
pub struct FormStateStore<S: DurableSlot> {
    slot: S,
    state: ApplicationDraft,
}

impl<S: DurableSlot> FormStateStore<S> {
    /// Carga el draft guardado. Contenido ausente, vacío o ilegible se trata
    /// como draft vacío; nunca falla.
    pub fn open(slot: S) -> Self {
        let state = match slot.read() {
            Ok(Some(raw)) if !raw.trim().is_empty() => match ApplicationDraft::from_json(&raw) {
                Ok(draft) => {
                    debug!("slot '{}' restored ({} fields)", slot.name(), draft.field_count());
                    draft
                }
                Err(e) => {
                    warn!("slot '{}' holds unreadable data, starting empty: {e}", slot.name());
                    ApplicationDraft::default()
                }
            },
            Ok(_) => ApplicationDraft::default(),
            Err(e) => {
                warn!("slot '{}' could not be read, starting empty: {e}", slot.name());
                ApplicationDraft::default()
            }
        };
        Self { slot, state }
    }

    pub fn state(&self) -> &ApplicationDraft { &self.state }

    pub fn slot(&self) -> &S { &self.slot }

    /// Merge shallow del parche; persiste antes de adoptar el nuevo estado.
    pub fn update(&mut self, patch: ApplicationDraft) -> Result<(), StoreError> {
        let next = self.state.merged(patch);
        let raw = next.to_json()?;
        self.slot.write(&raw)?;
        debug!("slot '{}' updated ({} fields)", self.slot.name(), next.field_count());
        self.state = next;
        Ok(())
    }

    /// Vacía memoria y slot.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.slot.clear()?;
        self.state = ApplicationDraft::default();
        debug!("slot '{}' cleared", self.slot.name());
        Ok(())
    }
}
