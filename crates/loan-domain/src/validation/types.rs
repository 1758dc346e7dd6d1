//! Tipos de diagnóstico de validación.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Falla puntual: ruta del campo (`loanRequest.terms`, `firstName`) y
/// mensaje para el usuario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

/// Lista ordenada de fallas. La validación no corta en la primera regla
/// violada, así que puede haber varias por campo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(path, message);
        errors
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue { path: path.into(),
                                      message: message.into() });
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Mensajes asociados a una ruta exacta.
    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.path == path)
            .map(|i| i.message.as_str())
            .collect()
    }

    pub fn contains(&self, path: &str, message: &str) -> bool {
        self.issues.iter().any(|i| i.path == path && i.message == message)
    }

    /// Antepone `prefix.` a cada ruta (una ruta vacía pasa a ser `prefix`).
    pub fn prefixed(self, prefix: &str) -> Self {
        let issues = self.issues
                         .into_iter()
                         .map(|i| FieldIssue { path: if i.path.is_empty() {
                                                   prefix.to_string()
                                               } else {
                                                   format!("{prefix}.{}", i.path)
                                               },
                                               message: i.message })
                         .collect();
        Self { issues }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, issue) in self.issues.iter().enumerate() {
            if n > 0 {
                write!(f, "; ")?;
            }
            if issue.path.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", issue.path, issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Contexto de evaluación entregado a los validadores.
///
/// Fijar `today` hace que las reglas de edad sean deterministas en tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn at(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Contexto con la fecha local actual.
    pub fn today() -> Self {
        Self { today: Local::now().date_naive() }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::today()
    }
}

/// Resultado interno de una sección: el valor tipado existe cuando todos los
/// campos tenían presencia y tipo correctos (aunque fallen rangos o formato),
/// lo que habilita la segunda pasada de refinamiento.
pub(crate) struct Checked<T> {
    pub value: Option<T>,
    pub issues: ValidationErrors,
}

impl<T> Checked<T> {
    pub(crate) fn rejected(issues: ValidationErrors) -> Self {
        Self { value: None, issues }
    }

    pub(crate) fn into_result(self) -> Result<T, ValidationErrors> {
        match self.value {
            Some(v) if self.issues.is_empty() => Ok(v),
            _ => Err(self.issues),
        }
    }
}
