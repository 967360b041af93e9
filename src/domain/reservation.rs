//! Reservation payload exchanged with the booking backend
//!
//! The JSON field names are the backend's (`nome`, `cognome`, `cf`, `ts`,
//! ...). Before a reservation is submitted its identity fields are checked
//! with the [`Validator`].

use super::errors::LabError;
use super::result::Result;
use crate::validation::{is_blank, Validator};
use serde::{Deserialize, Serialize};

/// A laboratory booking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(rename = "nome")]
    pub first_name: String,

    #[serde(rename = "cognome")]
    pub last_name: String,

    pub email: String,

    #[serde(rename = "dataOraInserimento", default)]
    pub inserted_at: Option<String>,

    #[serde(rename = "dataOraModifica", default)]
    pub modified_at: Option<String>,

    #[serde(rename = "dataOraPrenotazione", default)]
    pub booked_at: Option<String>,

    /// Fiscal code
    #[serde(rename = "cf")]
    pub fiscal_code: String,

    /// Health insurance card code
    #[serde(rename = "ts")]
    pub health_card: String,

    #[serde(rename = "laboratorio", default)]
    pub laboratory: Option<String>,

    #[serde(rename = "listaEsami", default)]
    pub exams: Vec<String>,
}

/// A rejected reservation field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field
    pub field: &'static str,
    pub message: String,
}

impl Reservation {
    /// Check every validated field, collecting all failures
    pub fn validate(&self, validator: &Validator) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for (field, value) in [("nome", &self.first_name), ("cognome", &self.last_name)] {
            if is_blank(Some(value.as_str())) {
                errors.push(FieldError {
                    field,
                    message: "required".to_string(),
                });
            }
        }

        let checks = [
            ("email", validator.email(&self.email)),
            ("cf", validator.fiscal_code(&self.fiscal_code)),
            ("ts", validator.health_card(&self.health_card)),
        ];
        for (field, outcome) in checks {
            if let Some(message) = outcome.error {
                errors.push(FieldError { field, message });
            }
        }

        errors
    }

    /// Validate and normalize, reporting every failing field
    ///
    /// The fiscal code is stored uppercase.
    pub fn into_validated(mut self, validator: &Validator) -> Result<Self> {
        let errors = self.validate(validator);
        if !errors.is_empty() {
            let summary = errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LabError::Validation(summary));
        }

        self.fiscal_code = self.fiscal_code.to_ascii_uppercase();
        Ok(self)
    }
}
