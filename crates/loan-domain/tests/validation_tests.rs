use chrono::NaiveDate;
use loan_domain::validation::messages::*;
use loan_domain::validation::{LOAN_AMOUNT_PATH, TERMS_PATH};
use loan_domain::{assemble_application, validate_application, validate_contact_details, validate_finalization,
                  validate_financial_information, validate_loan_request, validate_personal_information,
                  validate_section, ApplicationDraft, SectionKind, ValidationContext};
use serde_json::{json, Value};

fn ctx() -> ValidationContext {
    ValidationContext::at(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}

fn personal(dob: &str) -> Value {
    json!({"firstName": "Anna", "lastName": "von Müller", "dateOfBirth": dob})
}

fn complete(salary: f64, terms: u32, loan_amount: f64, dob: &str) -> Value {
    json!({
        "personalInformation": personal(dob),
        "contactDetails": {"email": "anna@example.com", "phone": "+491701234567"},
        "loanRequest": {"loanAmount": loan_amount, "upfrontPayment": 0, "terms": terms},
        "financialInformation": {
            "monthlySalary": salary,
            "hasAdditionalIncome": false,
            "hasMortgage": false,
            "hasOtherCredits": false
        },
        "finalization": {"confirmed": true}
    })
}

#[test]
fn age_boundary_exactly_79_rejects() {
    let errors = validate_personal_information(&personal("1947-10-16"), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("dateOfBirth"), vec![MAXIMUM_AGE]);
}

#[test]
fn age_boundary_one_day_short_of_79_accepts() {
    let info = validate_personal_information(&personal("1947-10-17"), &ctx()).expect("78 years 364 days");
    assert_eq!(info.last_name, "von Müller");
}

#[test]
fn older_applicants_always_reject() {
    for dob in ["1947-01-01", "1930-06-15", "1900-12-31"] {
        let errors = validate_personal_information(&personal(dob), &ctx()).unwrap_err();
        assert!(errors.contains("dateOfBirth", MAXIMUM_AGE), "{dob}");
    }
}

#[test]
fn first_name_must_be_a_single_token_of_allowed_letters() {
    let errors = validate_personal_information(&json!({"firstName": "Anna Lena", "lastName": "Weiß", "dateOfBirth": "1990-01-01"}),
                                               &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("firstName"), vec![SINGLE_NAME]);

    let errors = validate_personal_information(&json!({"firstName": "Zoë3", "lastName": "", "dateOfBirth": "1990-01-01"}),
                                               &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("firstName"), vec![LETTERS_ONLY]);
    assert_eq!(errors.messages_for("lastName"), vec![LAST_NAME_REQUIRED]);
}

#[test]
fn missing_fields_are_reported_together() {
    let errors = validate_personal_information(&json!({}), &ctx()).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains("firstName", FIRST_NAME_REQUIRED));
    assert!(errors.contains("lastName", LAST_NAME_REQUIRED));
    assert!(errors.contains("dateOfBirth", DATE_OF_BIRTH_REQUIRED));
}

#[test]
fn contact_details_formats() {
    assert!(validate_contact_details(&json!({"email": "a@b.de", "phone": "+4930123456"}), &ctx()).is_ok());
    let errors = validate_contact_details(&json!({"email": "a@b", "phone": "030123456"}), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("email"), vec![EMAIL_INVALID]);
    assert_eq!(errors.messages_for("phone"), vec![PHONE_INVALID]);
}

#[test]
fn upfront_payment_must_be_below_loan_amount() {
    for (amount, upfront) in [(10000.0, 10000.0), (20000.0, 25000.0), (70000.0, 70000.5)] {
        let errors = validate_loan_request(&json!({"loanAmount": amount, "upfrontPayment": upfront, "terms": 12}),
                                           &ctx()).unwrap_err();
        assert_eq!(errors.messages_for("upfrontPayment"), vec![UPFRONT_NOT_LESS]);
        assert!(errors.messages_for("loanAmount").is_empty());
    }
    for (amount, upfront) in [(10000.0, 0.0), (20000.0, 19999.0), (70000.0, 5000.0)] {
        assert!(validate_loan_request(&json!({"loanAmount": amount, "upfrontPayment": upfront, "terms": 12}), &ctx()).is_ok());
    }
}

#[test]
fn upfront_check_still_runs_when_amount_is_out_of_range() {
    let errors = validate_loan_request(&json!({"loanAmount": 5000, "upfrontPayment": 6000, "terms": 12}), &ctx()).unwrap_err();
    assert!(errors.contains("loanAmount", LOAN_AMOUNT_MIN));
    assert!(errors.contains("upfrontPayment", UPFRONT_NOT_LESS));
}

#[test]
fn terms_outside_range_or_fractional_reject() {
    for terms in [json!(9), json!(31), json!(0), json!(-12)] {
        let errors = validate_loan_request(&json!({"loanAmount": 20000, "upfrontPayment": 0, "terms": terms}), &ctx()).unwrap_err();
        assert_eq!(errors.messages_for("terms"), vec![TERMS_RANGE]);
    }
    let errors = validate_loan_request(&json!({"loanAmount": 20000, "upfrontPayment": 0, "terms": 12.5}), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("terms"), vec![TERMS_WHOLE]);
    let errors = validate_loan_request(&json!({"loanAmount": 20000, "upfrontPayment": 0, "terms": "12"}), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("terms"), vec![TERMS_INVALID]);
}

#[test]
fn upfront_check_still_runs_when_terms_is_fractional() {
    let errors = validate_loan_request(&json!({"loanAmount": 20000, "upfrontPayment": 30000, "terms": 12.5}), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("terms"), vec![TERMS_WHOLE]);
    assert_eq!(errors.messages_for("upfrontPayment"), vec![UPFRONT_NOT_LESS]);
    assert_eq!(errors.len(), 2);
}

#[test]
fn terms_inside_range_accept() {
    for terms in 10..=30u32 {
        let req = validate_loan_request(&json!({"loanAmount": 20000, "upfrontPayment": 0, "terms": terms}), &ctx()).unwrap();
        assert_eq!(req.terms, terms);
    }
}

#[test]
fn marked_financial_items_need_an_amount() {
    let errors = validate_financial_information(&json!({
                                                    "monthlySalary": 3000,
                                                    "hasAdditionalIncome": true,
                                                    "hasMortgage": true,
                                                    "mortgage": 0,
                                                    "hasOtherCredits": false
                                                }),
                                                &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("additionalIncome"), vec![MARKED_FINANCIAL_FIELDS]);
    assert_eq!(errors.messages_for("mortgage"), vec![MARKED_FINANCIAL_FIELDS]);
    assert!(errors.messages_for("otherCredits").is_empty());

    let fin = validate_financial_information(&json!({
                                                 "monthlySalary": 3000,
                                                 "hasAdditionalIncome": true,
                                                 "additionalIncome": 400
                                             }),
                                             &ctx()).unwrap();
    assert!(!fin.has_mortgage);
    assert_eq!(fin.additional_income, Some(400.0));
}

#[test]
fn negative_salary_rejects() {
    let errors = validate_financial_information(&json!({"monthlySalary": -1}), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for("monthlySalary"), vec![SALARY_REQUIRED]);
}

#[test]
fn finalization_requires_literal_true() {
    assert!(validate_finalization(&json!({"confirmed": true}), &ctx()).is_ok());
    for candidate in [json!({"confirmed": false}), json!({}), json!({"confirmed": "true"})] {
        let errors = validate_finalization(&candidate, &ctx()).unwrap_err();
        assert_eq!(errors.messages_for("confirmed"), vec![CONFIRMATION_REQUIRED]);
    }
}

#[test]
fn validate_section_returns_a_draft_patch() {
    let patch = validate_section(SectionKind::ContactDetails,
                                 &json!({"email": "anna@example.com", "phone": "+491701234567"}),
                                 &ctx()).unwrap();
    assert_eq!(patch.email.as_deref(), Some("anna@example.com"));
    assert_eq!(patch.field_count(), 2);
}

#[test]
fn combined_rejects_insufficient_income() {
    let errors = validate_application(&complete(1000.0, 20, 20000.0, "1990-01-01"), &ctx()).unwrap_err();
    assert_eq!(errors.len(), 1);
    let messages = errors.messages_for(LOAN_AMOUNT_PATH);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], insufficient_income(1000.0, 2000.0));
    assert!(messages[0].contains("(1000.00)"));
    assert!(messages[0].contains("at least 2000.00 per month"));
}

#[test]
fn combined_accepts_sufficient_income() {
    let app = validate_application(&complete(2000.0, 20, 20000.0, "1990-01-01"), &ctx()).unwrap();
    assert_eq!(app.loan_request.terms, 20);
}

#[test]
fn combined_rejects_age_at_maturity() {
    // 78 años + 30/12 = 80.5
    let errors = validate_application(&complete(9000.0, 30, 20000.0, "1948-01-01"), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for(TERMS_PATH), vec![AGE_AT_MATURITY]);
    // 78 años + 10/12 < 80
    assert!(validate_application(&complete(9000.0, 10, 20000.0, "1948-01-01"), &ctx()).is_ok());
}

#[test]
fn combined_prefixes_section_errors_and_skips_cross_rules_when_unparsed() {
    let mut candidate = complete(1000.0, 20, 20000.0, "1990-01-01");
    candidate["contactDetails"]["email"] = json!(42);
    candidate["finalization"] = Value::Null;
    let errors = validate_application(&candidate, &ctx()).unwrap_err();
    assert!(errors.contains("contactDetails.email", "Expected string, received number"));
    assert!(errors.contains("finalization", SECTION_REQUIRED));
    assert!(errors.messages_for(LOAN_AMOUNT_PATH).is_empty());
}

#[test]
fn assembled_draft_validates_like_nested_candidate() {
    let draft = ApplicationDraft { first_name: Some("Anna".into()),
                                   last_name: Some("Schmidt".into()),
                                   date_of_birth: Some("1990-01-01".into()),
                                   email: Some("anna@example.com".into()),
                                   phone: Some("+491701234567".into()),
                                   loan_amount: Some(20000.0),
                                   upfront_payment: Some(1000.0),
                                   terms: Some(20),
                                   monthly_salary: Some(1000.0),
                                   has_additional_income: Some(false),
                                   has_mortgage: Some(false),
                                   has_other_credits: Some(false),
                                   confirmed: Some(true),
                                   ..Default::default() };
    let errors = validate_application(&assemble_application(&draft), &ctx()).unwrap_err();
    assert_eq!(errors.messages_for(LOAN_AMOUNT_PATH), vec![insufficient_income(1000.0, 2000.0)]);

    let empty = validate_application(&assemble_application(&ApplicationDraft::default()), &ctx()).unwrap_err();
    assert!(empty.contains("personalInformation.firstName", FIRST_NAME_REQUIRED));
    assert!(empty.contains("finalization.confirmed", CONFIRMATION_REQUIRED));
}
