//! Reglas entre secciones, evaluadas sólo sobre el agregado completo.
//!
//! Ambas fallas se atribuyen a un campo del paso de préstamo para que la UI
//! pueda devolver al usuario a ese paso.

use super::messages::{insufficient_income, AGE_AT_MATURITY};
use super::types::{ValidationContext, ValidationErrors};
use crate::age::{age_on, parse_date_of_birth};
use crate::model::CompleteApplication;

pub const MAX_AGE_AT_MATURITY: f64 = 80.0;
/// El ingreso neto debe cubrir al menos este múltiplo de la cuota mensual.
pub const INCOME_COVERAGE_FACTOR: f64 = 2.0;

pub const TERMS_PATH: &str = "loanRequest.terms";
pub const LOAN_AMOUNT_PATH: &str = "loanRequest.loanAmount";

pub(crate) fn refine_application(app: &CompleteApplication, ctx: &ValidationContext, issues: &mut ValidationErrors) {
    check_age_at_maturity(app, ctx, issues);
    check_income_coverage(app, issues);
}

/// Edad actual + plazo en años debe quedar por debajo de 80. Es
/// independiente del chequeo de edad < 79 del paso 1.
fn check_age_at_maturity(app: &CompleteApplication, ctx: &ValidationContext, issues: &mut ValidationErrors) {
    let Some(birth) = parse_date_of_birth(&app.personal_information.date_of_birth) else {
        return;
    };
    let age = f64::from(age_on(birth, ctx.today));
    let term_years = f64::from(app.loan_request.terms) / 12.0;
    if age + term_years >= MAX_AGE_AT_MATURITY {
        issues.push(TERMS_PATH, AGE_AT_MATURITY);
    }
}

fn check_income_coverage(app: &CompleteApplication, issues: &mut ValidationErrors) {
    let terms = app.loan_request.terms;
    if terms == 0 {
        return;
    }
    let net = app.financial_information.monthly_net_income();
    let required = app.loan_request.loan_amount / f64::from(terms) * INCOME_COVERAGE_FACTOR;
    if net < required {
        issues.push(LOAN_AMOUNT_PATH, insufficient_income(net, required));
    }
}
