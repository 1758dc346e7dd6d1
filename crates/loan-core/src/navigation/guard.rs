use log::info;
use loan_domain::ApplicationDraft;

use super::Route;

/// Resultado de consultar el guard para un path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow(Route),
    Redirect(Route),
}

impl GuardDecision {
    /// Ruta donde termina el usuario.
    pub fn route(&self) -> Route {
        match self {
            GuardDecision::Allow(r) | GuardDecision::Redirect(r) => *r,
        }
    }

    pub fn is_allowed(&self) -> bool { matches!(self, GuardDecision::Allow(_)) }
}

/// Decide si se puede entrar a `path` con el draft actual.
///
/// - Paths desconocidos redirigen al paso 1.
/// - Los pasos se pueden visitar en cualquier orden.
/// - La pantalla de éxito exige que todas las secciones estén completas.
pub fn guard(path: &str, draft: &ApplicationDraft) -> GuardDecision {
    match Route::parse(path) {
        None => {
            info!("unknown route '{path}', redirecting to step 1");
            GuardDecision::Redirect(Route::first())
        }
        Some(Route::Success) if !is_ready_for_success(draft) => {
            info!("success screen requested with incomplete data, redirecting to step 1");
            GuardDecision::Redirect(Route::first())
        }
        Some(route) => GuardDecision::Allow(route),
    }
}

/// Chequeo de presencia, no de validez: textos no vacíos, montos presentes
/// (préstamo y plazo además mayores a cero) y confirmación explícita.
pub fn is_ready_for_success(draft: &ApplicationDraft) -> bool {
    let texts = [&draft.first_name, &draft.last_name, &draft.date_of_birth, &draft.email, &draft.phone];
    texts.iter().all(|t| t.as_deref().is_some_and(|s| !s.is_empty()))
    && draft.loan_amount.is_some_and(|v| v > 0.0)
    && draft.terms.is_some_and(|v| v > 0)
    // 0 es un valor válido para anticipo y salario: basta con que estén
    && draft.upfront_payment.is_some()
    && draft.monthly_salary.is_some()
    && draft.confirmed == Some(true)
}
