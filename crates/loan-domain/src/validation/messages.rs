//! Mensajes de validación mostrados al usuario.

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const LETTERS_ONLY: &str = "Only Latin and German letters are allowed";
pub const SINGLE_NAME: &str = "Only a single name is allowed";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of birth is required";
pub const DATE_OF_BIRTH_INVALID: &str = "Please enter a valid date of birth";
pub const MAXIMUM_AGE: &str = "Maximum age allowed is 79 years";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PHONE_REQUIRED: &str = "Phone is required";
pub const PHONE_INVALID: &str = "Phone must be in E.164 format (e.g., +1234567890)";

pub const LOAN_AMOUNT_REQUIRED: &str = "Loan amount is required";
pub const LOAN_AMOUNT_INVALID: &str = "Please enter a valid loan amount";
pub const LOAN_AMOUNT_MIN: &str = "Loan amount must be at least €10,000";
pub const LOAN_AMOUNT_MAX: &str = "Loan amount cannot exceed €70,000";
pub const UPFRONT_REQUIRED: &str = "Upfront payment is required";
pub const UPFRONT_INVALID: &str = "Please enter a valid upfront payment";
pub const UPFRONT_NEGATIVE: &str = "Upfront payment cannot be negative";
pub const UPFRONT_NOT_LESS: &str = "Upfront payment must be less than the loan amount";
pub const TERMS_REQUIRED: &str = "Loan terms is required";
pub const TERMS_INVALID: &str = "Please enter a valid number of months";
pub const TERMS_WHOLE: &str = "Please enter a whole number of months";
pub const TERMS_RANGE: &str = "Loan terms must be between 10 and 30 months";

pub const SALARY_REQUIRED: &str = "Monthly salary is required";
pub const SALARY_INVALID: &str = "Please enter a valid monthly salary";
pub const MARKED_FINANCIAL_FIELDS: &str = "Please fill in all marked financial fields";

pub const CONFIRMATION_REQUIRED: &str = "You must confirm the data to proceed";

pub const SECTION_REQUIRED: &str = "Required";
pub const AGE_AT_MATURITY: &str =
    "The combination of loan terms and your age would exceed the maximum allowed age of 80 years";

pub fn insufficient_income(net: f64, required: f64) -> String {
    format!("Your monthly net income ({net:.2}) is insufficient for the requested loan amount. You need at least \
             {required:.2} per month. Please reduce the loan amount or increase your income.")
}
