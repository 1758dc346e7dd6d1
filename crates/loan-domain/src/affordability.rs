//! Chequeo de asequibilidad del paso 4.
//!
//! No forma parte del schema: se calcula con el préstamo ya guardado y la
//! sección financiera recién validada. Si la mitad del ingreso disponible no
//! cubre la cuota estimada, el paso se bloquea y se ofrecen dos salidas.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::FinancialInformation;

pub const AFFORDABILITY_MESSAGE: &str = "Based on your financial information, this loan amount may not be affordable. \
                                         Please consider reducing the loan amount or starting over with a new \
                                         application.";

/// Fracción del ingreso disponible que puede destinarse a la cuota.
pub const DISPOSABLE_SHARE: f64 = 0.5;

/// Acciones de recuperación ofrecidas cuando el préstamo no es asequible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryAction {
    /// Volver al paso del préstamo (paso 3).
    ReduceLoanAmount,
    /// Reset completo de la solicitud.
    StartOver,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AffordabilityError {
    pub message: String,
    pub disposable_income: f64,
    pub monthly_payment: f64,
    pub recovery: Vec<RecoveryAction>,
}

/// `loan_amount` ausente cuenta como 0 y `terms` ausente o cero como 1.
pub fn check_affordability(loan_amount: Option<f64>,
                           terms: Option<u32>,
                           financial: &FinancialInformation)
                           -> Result<(), AffordabilityError> {
    let terms = terms.filter(|t| *t > 0).unwrap_or(1);
    let monthly_payment = loan_amount.unwrap_or(0.0) / f64::from(terms);
    let disposable_income = financial.monthly_net_income();

    if disposable_income * DISPOSABLE_SHARE < monthly_payment {
        return Err(AffordabilityError { message: AFFORDABILITY_MESSAGE.to_string(),
                                        disposable_income,
                                        monthly_payment,
                                        recovery: vec![RecoveryAction::ReduceLoanAmount, RecoveryAction::StartOver] });
    }
    Ok(())
}
