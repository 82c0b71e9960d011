use crate::mvi::Reducer;

use super::intent::StoreIntent;
use super::state::{DashboardState, SyncState};

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = DashboardState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::ReplaceSensors(sensors) => DashboardState { sensors, ..state },
            StoreIntent::LoadApplied(sensors) => DashboardState {
                sensors,
                sync: SyncState {
                    loading: false,
                    ..state.sync
                },
                ..state
            },
            StoreIntent::ReplaceForm(form) => DashboardState { form, ..state },
            StoreIntent::EditForm { field, value } => {
                let DashboardState {
                    sensors,
                    form,
                    sync,
                    filter,
                } = state;
                DashboardState {
                    sensors,
                    form: form.with_field(field, value),
                    sync,
                    filter,
                }
            }
            StoreIntent::ReplaceSync(sync) => DashboardState { sync, ..state },
            StoreIntent::ReplaceFilter(filter) => DashboardState { filter, ..state },
        }
    }
}
