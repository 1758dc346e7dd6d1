//! Regla condicional flag → monto.
//!
//! Un checkbox "tengo X" habilita un monto opcional. La regla se evalúa
//! sobre el par completo: si el flag está activo el monto debe existir y ser
//! distinto de cero. La falla se atribuye al campo del monto.

use super::messages::MARKED_FINANCIAL_FIELDS;
use super::types::ValidationErrors;
use crate::model::FinancialInformation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalAmount {
    pub flag: &'static str,
    pub amount: &'static str,
}

pub const ADDITIONAL_INCOME: ConditionalAmount = ConditionalAmount { flag: "hasAdditionalIncome",
                                                                     amount: "additionalIncome" };
pub const MORTGAGE: ConditionalAmount = ConditionalAmount { flag: "hasMortgage",
                                                            amount: "mortgage" };
pub const OTHER_CREDITS: ConditionalAmount = ConditionalAmount { flag: "hasOtherCredits",
                                                                 amount: "otherCredits" };

impl ConditionalAmount {
    pub fn is_satisfied(&self, enabled: bool, amount: Option<f64>) -> bool {
        !enabled || amount.is_some_and(|a| a != 0.0)
    }

    pub fn check(&self, enabled: bool, amount: Option<f64>, issues: &mut ValidationErrors) {
        if !self.is_satisfied(enabled, amount) {
            issues.push(self.amount, MARKED_FINANCIAL_FIELDS);
        }
    }
}

/// Los tres pares de la sección financiera, en orden de formulario.
pub(crate) fn financial_pairs(fin: &FinancialInformation) -> [(ConditionalAmount, bool, Option<f64>); 3] {
    [(ADDITIONAL_INCOME, fin.has_additional_income, fin.additional_income),
     (MORTGAGE, fin.has_mortgage, fin.mortgage),
     (OTHER_CREDITS, fin.has_other_credits, fin.other_credits)]
}
