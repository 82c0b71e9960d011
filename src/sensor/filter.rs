use std::fmt;

use super::model::SensorKind;

/// Client-side view parameter. Never sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Temperatura,
    Humedad,
    Luz,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Temperatura, Filter::Humedad, Filter::Luz];

    /// Whether a sensor of `kind` is shown under this filter.
    ///
    /// `Other` kinds only ever match `All`.
    pub fn matches(self, kind: &SensorKind) -> bool {
        match self {
            Filter::All => true,
            Filter::Temperatura => *kind == SensorKind::Temperatura,
            Filter::Humedad => *kind == SensorKind::Humedad,
            Filter::Luz => *kind == SensorKind::Luz,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Temperatura => "Temperatura",
            Filter::Humedad => "Humedad",
            Filter::Luz => "Luz",
        }
    }

    /// Next selection, wrapping from `Luz` back to `All`.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Temperatura,
            Filter::Temperatura => Filter::Humedad,
            Filter::Humedad => Filter::Luz,
            Filter::Luz => Filter::All,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
