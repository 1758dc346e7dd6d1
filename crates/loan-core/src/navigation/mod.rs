//! Rutas del wizard, guard de acceso y navegador.

mod guard;
mod navigator;
mod route;

pub use guard::{guard, is_ready_for_success, GuardDecision};
pub use navigator::{HistoryNavigator, Navigator};
pub use route::{Route, WizardStep};
