use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::mvi::Reducer;
use crate::sensor::{Filter, FormDraft, FormField, Sensor};

use super::intent::StoreIntent;
use super::reducer::StoreReducer;
use super::state::{DashboardState, SyncState};

type Callback = Arc<dyn Fn(&DashboardState) + Send + Sync>;

/// Shared handle to the dashboard state.
///
/// Cloning the handle is cheap and every clone sees the same state. Each
/// dispatch runs the reducer under the state lock, then calls subscribers
/// with the new snapshot after the lock is released, in registration order.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    state: Mutex<DashboardState>,
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_subscriber: AtomicU64,
}

/// Keeps a subscriber registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.inner.state.lock().clone()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&DashboardState) + Send + Sync + 'static,
    {
        let id = self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push((id, Arc::new(callback)));
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    pub fn dispatch(&self, intent: StoreIntent) {
        let snapshot = {
            let mut state = self.inner.state.lock();
            *state = StoreReducer::reduce(std::mem::take(&mut *state), intent);
            state.clone()
        };

        // Callbacks may dispatch again or subscribe, so neither lock is held.
        let subscribers: Vec<Callback> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in subscribers {
            callback(&snapshot);
        }
    }

    pub fn set_sensors(&self, sensors: Vec<Sensor>) {
        self.dispatch(StoreIntent::ReplaceSensors(sensors));
    }

    /// Install a fetched collection and clear `sync.loading` in one step.
    pub fn apply_load(&self, sensors: Vec<Sensor>) {
        self.dispatch(StoreIntent::LoadApplied(sensors));
    }

    pub fn set_form(&self, form: FormDraft) {
        self.dispatch(StoreIntent::ReplaceForm(form));
    }

    pub fn edit_form(&self, field: FormField, value: impl Into<String>) {
        self.dispatch(StoreIntent::EditForm {
            field,
            value: value.into(),
        });
    }

    pub fn set_sync(&self, sync: SyncState) {
        self.dispatch(StoreIntent::ReplaceSync(sync));
    }

    pub fn set_filter(&self, filter: Filter) {
        self.dispatch(StoreIntent::ReplaceFilter(filter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_may_read_store_without_deadlock() {
        let store = Store::new();
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |_| {
            *sink.lock() = Some(reader.snapshot().filter);
        });

        store.set_filter(Filter::Humedad);
        assert_eq!(*seen.lock(), Some(Filter::Humedad));
    }

    #[test]
    fn applied_load_notifies_once() {
        let store = Store::new();
        store.set_sync(SyncState::loading());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |state: &DashboardState| {
            sink.lock().push((state.sensors.len(), state.sync.loading));
        });

        store.apply_load(Vec::new());

        assert_eq!(*seen.lock(), vec![(0, false)]);
    }
}
