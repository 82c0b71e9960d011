use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::model::SensorKind;

/// One field of the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Nombre,
    Tipo,
    Valor,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Nombre, FormField::Tipo, FormField::Valor];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Nombre => "nombre",
            FormField::Tipo => "tipo",
            FormField::Valor => "valor",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unvalidated, in-progress input for a new sensor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub nombre: String,
    /// One of the creatable kind tags, or empty while nothing is picked.
    pub tipo: String,
    /// Numeric text as typed.
    pub valor: String,
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please fill in every field (missing: {})", join_fields(.missing))]
    MissingFields { missing: Vec<FormField> },

    #[error("'{tipo}' is not a sensor type")]
    UnknownKind { tipo: String },

    #[error("'{valor}' is not a number")]
    InvalidNumber { valor: String },
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wire body for `POST /api/sensores`. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSensor {
    pub nombre: String,
    pub tipo: SensorKind,
    pub valor: f64,
}

impl FormDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Nombre => &self.nombre,
            FormField::Tipo => &self.tipo,
            FormField::Valor => &self.valor,
        }
    }

    /// Copy of this draft with `field` replaced verbatim.
    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        match field {
            FormField::Nombre => self.nombre = value,
            FormField::Tipo => self.tipo = value,
            FormField::Valor => self.valor = value,
        }
        self
    }

    /// Turn the draft into a wire record.
    ///
    /// Blank fields are reported together before the type and number checks.
    pub fn validate(&self) -> Result<NewSensor, ValidationError> {
        let missing: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { missing });
        }

        let tipo = SensorKind::parse_creatable(self.tipo.trim()).ok_or_else(|| {
            ValidationError::UnknownKind {
                tipo: self.tipo.clone(),
            }
        })?;

        let valor = self
            .valor
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::InvalidNumber {
                valor: self.valor.clone(),
            })?;

        Ok(NewSensor {
            nombre: self.nombre.trim().to_string(),
            tipo,
            valor,
        })
    }
}
