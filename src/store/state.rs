use crate::mvi::UiState;
use crate::sensor::{Filter, FormDraft, Sensor, SensorId};

/// Outcome of the most recent load attempt.
///
/// `loading` and `error` are independent: an error from the previous attempt
/// stays visible while a new one is in flight only until that attempt starts
/// and clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncState {
    pub loading: bool,
    pub error: Option<String>,
}

impl SyncState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: Some(message.into()),
        }
    }
}

/// Full snapshot of the dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    /// Last applied list fetch, in server order.
    pub sensors: Vec<Sensor>,
    pub form: FormDraft,
    pub sync: SyncState,
    pub filter: Filter,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn find(&self, id: &SensorId) -> Option<&Sensor> {
        self.sensors.iter().find(|s| &s.id == id)
    }
}
