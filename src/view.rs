//! Derived, display-ready data. Everything here is a pure function of a
//! store snapshot and is recomputed on every read.

use std::fmt;

use crate::sensor::{Filter, Sensor};

/// Sensors shown under `filter`, in their original order.
pub fn visible(sensors: &[Sensor], filter: Filter) -> Vec<&Sensor> {
    sensors.iter().filter(|s| filter.matches(&s.tipo)).collect()
}

/// Why the list is empty, when it is and no load is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing on the server (as of the last load).
    NoSensors,
    /// Sensors exist, just none of this kind.
    NoneOfKind(Filter),
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyState::NoSensors => f.write_str("No sensors registered yet. Add one!"),
            EmptyState::NoneOfKind(filter) => write!(f, "No sensors of type \"{}\"", filter),
        }
    }
}

pub fn empty_state(sensors: &[Sensor], filter: Filter, loading: bool) -> Option<EmptyState> {
    if loading || !visible(sensors, filter).is_empty() {
        return None;
    }
    match filter {
        Filter::All => Some(EmptyState::NoSensors),
        kind => Some(EmptyState::NoneOfKind(kind)),
    }
}

/// A load is in flight and there is nothing to show yet.
pub fn show_loading_placeholder(sensors: &[Sensor], loading: bool) -> bool {
    loading && sensors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorKind;

    fn sensor(id: i64, tipo: SensorKind) -> Sensor {
        Sensor {
            id: id.into(),
            nombre: format!("s{}", id),
            tipo,
            valor: 1.0,
        }
    }

    #[test]
    fn nothing_reported_while_loading() {
        assert_eq!(empty_state(&[], Filter::All, true), None);
    }

    #[test]
    fn kind_filter_reports_that_kind() {
        let sensors = vec![sensor(1, SensorKind::Humedad)];
        assert_eq!(
            empty_state(&sensors, Filter::Temperatura, false),
            Some(EmptyState::NoneOfKind(Filter::Temperatura))
        );
        assert_eq!(empty_state(&sensors, Filter::Humedad, false), None);
    }

    #[test]
    fn placeholder_only_without_data() {
        assert!(show_loading_placeholder(&[], true));
        assert!(!show_loading_placeholder(&[sensor(1, SensorKind::Luz)], true));
        assert!(!show_loading_placeholder(&[], false));
    }
}
