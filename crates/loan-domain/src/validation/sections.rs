//! Reglas por sección (pasos 1 a 5).
//!
//! Cada `check_*` corre la pasada de campos y, si la sección quedó parseada,
//! la pasada de refinamiento entre campos de la misma sección.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::conditional::financial_pairs;
use super::fields::FieldReader;
use super::messages::*;
use super::types::{Checked, ValidationContext, ValidationErrors};
use crate::age::{age_on, parse_date_of_birth};
use crate::model::{ContactDetails, Finalization, FinancialInformation, LoanRequest, PersonalInformation};

pub const MAX_AGE_EXCLUSIVE: i32 = 79;
pub const LOAN_AMOUNT_MIN_VALUE: f64 = 10_000.0;
pub const LOAN_AMOUNT_MAX_VALUE: f64 = 70_000.0;
pub const TERMS_MIN_MONTHS: f64 = 10.0;
pub const TERMS_MAX_MONTHS: f64 = 30.0;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-ZäöüßÄÖÜ\s-]+$").expect("name pattern"));
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("phone pattern"));
// Sin lookahead en `regex`: los puntos inicial/dobles se revisan aparte.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").expect("email pattern")
});

pub(crate) fn is_email(raw: &str) -> bool {
    !raw.starts_with('.') && !raw.contains("..") && EMAIL_PATTERN.is_match(raw)
}

pub(crate) fn check_personal_information(candidate: &Value, ctx: &ValidationContext) -> Checked<PersonalInformation> {
    let mut reader = match FieldReader::new(candidate) {
        Ok(r) => r,
        Err(issues) => return Checked::rejected(issues),
    };

    let first_name = reader.string("firstName", FIRST_NAME_REQUIRED);
    if let Some(name) = first_name {
        if name.is_empty() {
            reader.issue("firstName", FIRST_NAME_REQUIRED);
        } else {
            if !NAME_PATTERN.is_match(name) {
                reader.issue("firstName", LETTERS_ONLY);
            }
            if name.contains(' ') {
                reader.issue("firstName", SINGLE_NAME);
            }
        }
    }

    let last_name = reader.string("lastName", LAST_NAME_REQUIRED);
    if let Some(name) = last_name {
        if name.is_empty() {
            reader.issue("lastName", LAST_NAME_REQUIRED);
        } else if !NAME_PATTERN.is_match(name) {
            reader.issue("lastName", LETTERS_ONLY);
        }
    }

    let date_of_birth = reader.string("dateOfBirth", DATE_OF_BIRTH_REQUIRED);
    if let Some(raw) = date_of_birth {
        if raw.trim().is_empty() {
            reader.issue("dateOfBirth", DATE_OF_BIRTH_REQUIRED);
        } else {
            match parse_date_of_birth(raw) {
                Some(birth) if age_on(birth, ctx.today) >= MAX_AGE_EXCLUSIVE => reader.issue("dateOfBirth", MAXIMUM_AGE),
                Some(_) => {}
                None => reader.issue("dateOfBirth", DATE_OF_BIRTH_INVALID),
            }
        }
    }

    let (issues, parsed) = reader.finish();
    let value = match (parsed, first_name, last_name, date_of_birth) {
        (true, Some(f), Some(l), Some(d)) => Some(PersonalInformation { first_name: f.to_string(),
                                                                        last_name: l.to_string(),
                                                                        date_of_birth: d.to_string() }),
        _ => None,
    };
    Checked { value, issues }
}

pub(crate) fn check_contact_details(candidate: &Value, _ctx: &ValidationContext) -> Checked<ContactDetails> {
    let mut reader = match FieldReader::new(candidate) {
        Ok(r) => r,
        Err(issues) => return Checked::rejected(issues),
    };

    let email = reader.string("email", EMAIL_REQUIRED);
    if let Some(e) = email {
        if !is_email(e) {
            reader.issue("email", EMAIL_INVALID);
        }
    }
    let phone = reader.string("phone", PHONE_REQUIRED);
    if let Some(p) = phone {
        if !PHONE_PATTERN.is_match(p) {
            reader.issue("phone", PHONE_INVALID);
        }
    }

    let (issues, parsed) = reader.finish();
    let value = match (parsed, email, phone) {
        (true, Some(e), Some(p)) => Some(ContactDetails { email: e.to_string(),
                                                          phone: p.to_string() }),
        _ => None,
    };
    Checked { value, issues }
}

pub(crate) fn check_loan_request(candidate: &Value, _ctx: &ValidationContext) -> Checked<LoanRequest> {
    let mut reader = match FieldReader::new(candidate) {
        Ok(r) => r,
        Err(issues) => return Checked::rejected(issues),
    };

    let loan_amount = reader.number("loanAmount", LOAN_AMOUNT_REQUIRED, LOAN_AMOUNT_INVALID);
    if let Some(amount) = loan_amount {
        if amount < LOAN_AMOUNT_MIN_VALUE {
            reader.issue("loanAmount", LOAN_AMOUNT_MIN);
        }
        if amount > LOAN_AMOUNT_MAX_VALUE {
            reader.issue("loanAmount", LOAN_AMOUNT_MAX);
        }
    }

    let upfront_payment = reader.number("upfrontPayment", UPFRONT_REQUIRED, UPFRONT_INVALID);
    if let Some(upfront) = upfront_payment {
        if upfront < 0.0 {
            reader.issue("upfrontPayment", UPFRONT_NEGATIVE);
        }
    }

    let terms = reader.number("terms", TERMS_REQUIRED, TERMS_INVALID);
    if let Some(t) = terms {
        if t.fract() != 0.0 {
            reader.issue("terms", TERMS_WHOLE);
            // sin plazo entero no hay valor tipado para refinar
            reader.unparsed();
        }
        if !(TERMS_MIN_MONTHS..=TERMS_MAX_MONTHS).contains(&t) {
            reader.issue("terms", TERMS_RANGE);
        }
    }

    let (mut issues, parsed) = reader.finish();
    let value = match (parsed, loan_amount, upfront_payment, terms) {
        (true, Some(a), Some(u), Some(t)) if t >= 0.0 && t <= f64::from(u32::MAX) => {
            Some(LoanRequest { loan_amount: a,
                               upfront_payment: u,
                               terms: t as u32 })
        }
        _ => None,
    };

    // el refinamiento sólo necesita los dos montos, no un plazo válido
    if let (Some(amount), Some(upfront)) = (loan_amount, upfront_payment) {
        refine_loan_request(amount, upfront, &mut issues);
    }
    Checked { value, issues }
}

fn refine_loan_request(loan_amount: f64, upfront_payment: f64, issues: &mut ValidationErrors) {
    if upfront_payment >= loan_amount {
        issues.push("upfrontPayment", UPFRONT_NOT_LESS);
    }
}

pub(crate) fn check_financial_information(candidate: &Value, _ctx: &ValidationContext) -> Checked<FinancialInformation> {
    let mut reader = match FieldReader::new(candidate) {
        Ok(r) => r,
        Err(issues) => return Checked::rejected(issues),
    };

    let monthly_salary = reader.number("monthlySalary", SALARY_REQUIRED, SALARY_INVALID);
    if let Some(salary) = monthly_salary {
        if salary < 0.0 {
            reader.issue("monthlySalary", SALARY_REQUIRED);
        }
    }
    let has_additional_income = reader.flag("hasAdditionalIncome");
    let additional_income = reader.optional_number("additionalIncome");
    let has_mortgage = reader.flag("hasMortgage");
    let mortgage = reader.optional_number("mortgage");
    let has_other_credits = reader.flag("hasOtherCredits");
    let other_credits = reader.optional_number("otherCredits");

    let (mut issues, parsed) = reader.finish();
    let value = match (parsed,
                       monthly_salary,
                       has_additional_income,
                       additional_income,
                       has_mortgage,
                       mortgage,
                       has_other_credits,
                       other_credits)
    {
        (true, Some(salary), Some(hai), Some(ai), Some(hm), Some(m), Some(hoc), Some(oc)) => {
            Some(FinancialInformation { monthly_salary: salary,
                                        has_additional_income: hai,
                                        additional_income: ai,
                                        has_mortgage: hm,
                                        mortgage: m,
                                        has_other_credits: hoc,
                                        other_credits: oc })
        }
        _ => None,
    };

    if let Some(fin) = &value {
        for (rule, enabled, amount) in financial_pairs(fin) {
            rule.check(enabled, amount, &mut issues);
        }
    }
    Checked { value, issues }
}

pub(crate) fn check_finalization(candidate: &Value, _ctx: &ValidationContext) -> Checked<Finalization> {
    let mut reader = match FieldReader::new(candidate) {
        Ok(r) => r,
        Err(issues) => return Checked::rejected(issues),
    };

    // sólo `true` literal confirma; ausente o de otro tipo no parsea
    let confirmed = match candidate.get("confirmed") {
        Some(Value::Bool(b)) => Some(*b),
        _ => {
            reader.unparsed();
            None
        }
    };
    if confirmed != Some(true) {
        reader.issue("confirmed", CONFIRMATION_REQUIRED);
    }

    let (issues, parsed) = reader.finish();
    let value = match (parsed, confirmed) {
        (true, Some(c)) => Some(Finalization { confirmed: c }),
        _ => None,
    };
    Checked { value, issues }
}
