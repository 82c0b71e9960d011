use crate::mvi::Intent;
use crate::sensor::{Filter, FormDraft, FormField, Sensor};

use super::state::SyncState;

/// Named mutations of the dashboard state. Each one touches a single slice.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// Wholesale replacement of the collection.
    ReplaceSensors(Vec<Sensor>),
    /// A load settled: new collection, `loading` cleared, `error` untouched.
    LoadApplied(Vec<Sensor>),
    ReplaceForm(FormDraft),
    /// One keystroke worth of form input.
    EditForm { field: FormField, value: String },
    ReplaceSync(SyncState),
    ReplaceFilter(Filter),
}

impl Intent for StoreIntent {}
