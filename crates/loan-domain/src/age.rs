//! Cálculo de edad en años completos.
//!
//! La edad se obtiene restando años de calendario y descontando uno si el
//! cumpleaños aún no llegó en el año de evaluación.

use chrono::{DateTime, Datelike, NaiveDate};

/// Interpreta una fecha de nacimiento `YYYY-MM-DD`. También acepta un
/// timestamp RFC 3339, del cual se toma la parte de fecha.
pub fn parse_date_of_birth(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
                                                  .or_else(|| {
                                                      DateTime::parse_from_rfc3339(trimmed).ok()
                                                                                           .map(|dt| dt.date_naive())
                                                  })
}

/// Edad en años completos de alguien nacido en `birth` a la fecha `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age - 1
    } else {
        age
    }
}
