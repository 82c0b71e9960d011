use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned sensor identifier.
///
/// Opaque to the client: any JSON number or string is accepted and written
/// back into the delete path exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensorId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorId::Number(n) => write!(f, "{}", n),
            SensorId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SensorId {
    fn from(value: i64) -> Self {
        SensorId::Number(value.into())
    }
}

impl From<&str> for SensorId {
    fn from(value: &str) -> Self {
        SensorId::Text(value.to_string())
    }
}

/// Sensor type tag (`tipo` on the wire).
///
/// Only the first three can be created from the form. Anything else the
/// server hands back is kept as `Other` so it still shows up under "all".
/// A non-string tag is kept as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum SensorKind {
    Temperatura,
    Humedad,
    Luz,
    Other(String),
}

impl SensorKind {
    /// Kinds offered by the create form, in display order.
    pub const CREATABLE: [SensorKind; 3] =
        [SensorKind::Temperatura, SensorKind::Humedad, SensorKind::Luz];

    pub fn as_str(&self) -> &str {
        match self {
            SensorKind::Temperatura => "Temperatura",
            SensorKind::Humedad => "Humedad",
            SensorKind::Luz => "Luz",
            SensorKind::Other(tag) => tag,
        }
    }

    /// Parse one of the creatable tags. Unknown tags yield `None`.
    pub fn parse_creatable(tag: &str) -> Option<SensorKind> {
        match tag {
            "Temperatura" => Some(SensorKind::Temperatura),
            "Humedad" => Some(SensorKind::Humedad),
            "Luz" => Some(SensorKind::Luz),
            _ => None,
        }
    }

    /// Measurement unit shown next to the value.
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperatura => "°C",
            SensorKind::Humedad => "%",
            SensorKind::Luz => "lux",
            SensorKind::Other(_) => "",
        }
    }
}

impl From<String> for SensorKind {
    fn from(tag: String) -> Self {
        SensorKind::parse_creatable(&tag).unwrap_or(SensorKind::Other(tag))
    }
}

impl<'de> Deserialize<'de> for SensorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(tag) => SensorKind::from(tag),
            other => SensorKind::Other(other.to_string()),
        })
    }
}

impl From<SensorKind> for String {
    fn from(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sensor record as fetched from `GET /api/sensores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    pub nombre: String,
    pub tipo: SensorKind,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub valor: f64,
}

impl Sensor {
    /// `valor` followed by the unit for the sensor's kind, e.g. `22 °C`.
    pub fn reading(&self) -> String {
        let unit = self.tipo.unit();
        if unit.is_empty() {
            format!("{}", self.valor)
        } else {
            format!("{} {}", self.valor, unit)
        }
    }
}

/// Records created by older clients carry `valor` as the raw form text.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("valor '{}' is not a number", text))),
    }
}
