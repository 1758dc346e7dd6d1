//! Lectura de campos de un payload candidato (primera pasada).
//!
//! Un campo ausente, `null` o de tipo incorrecto marca la sección como no
//! parseada; las fallas de rango o formato se registran con `issue` y no
//! impiden la pasada de refinamiento.

use serde_json::{Map, Value};

use super::types::ValidationErrors;

pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    issues: ValidationErrors,
    parsed: bool,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(candidate: &'a Value) -> Result<Self, ValidationErrors> {
        match candidate {
            Value::Object(object) => Ok(Self { object,
                                               issues: ValidationErrors::new(),
                                               parsed: true }),
            other => Err(ValidationErrors::single("", format!("Expected object, received {}", type_name(other)))),
        }
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    fn reject(&mut self, key: &str, message: impl Into<String>) {
        self.parsed = false;
        self.issues.push(key, message);
    }

    pub(crate) fn string(&mut self, key: &str, required: &str) -> Option<&'a str> {
        match self.present(key) {
            None => {
                self.reject(key, required);
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => {
                self.reject(key, format!("Expected string, received {}", type_name(other)));
                None
            }
        }
    }

    pub(crate) fn number(&mut self, key: &str, required: &str, invalid: &str) -> Option<f64> {
        match self.present(key) {
            None => {
                self.reject(key, required);
                None
            }
            Some(v) => match v.as_f64() {
                Some(n) => Some(n),
                None => {
                    self.reject(key, invalid);
                    None
                }
            },
        }
    }

    /// Número opcional: `Some(None)` si falta, `None` si el tipo es inválido.
    pub(crate) fn optional_number(&mut self, key: &str) -> Option<Option<f64>> {
        match self.present(key) {
            None => Some(None),
            Some(v) => match v.as_f64() {
                Some(n) => Some(Some(n)),
                None => {
                    self.reject(key, format!("Expected number, received {}", type_name(v)));
                    None
                }
            },
        }
    }

    /// Checkbox: ausente equivale a desmarcado.
    pub(crate) fn flag(&mut self, key: &str) -> Option<bool> {
        match self.present(key) {
            None => Some(false),
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                self.reject(key, format!("Expected boolean, received {}", type_name(other)));
                None
            }
        }
    }

    pub(crate) fn issue(&mut self, key: &str, message: impl Into<String>) {
        self.issues.push(key, message);
    }

    /// Marca la sección como no parseada sin registrar falla.
    pub(crate) fn unparsed(&mut self) {
        self.parsed = false;
    }

    pub(crate) fn finish(self) -> (ValidationErrors, bool) {
        (self.issues, self.parsed)
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
