//! Estado del formulario y su slot durable.

mod form_state;
mod slot;

pub use form_state::FormStateStore;
pub use slot::{DurableSlot, InMemorySlot};
