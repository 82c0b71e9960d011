use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::LoadOrdering;
use crate::sensor::{FormDraft, SensorId};
use crate::store::{Store, SyncState};

use super::error::ActionError;

/// The only text ever written to `sync.error`.
pub const LOAD_ERROR_MESSAGE: &str = "could not reach the server";

/// What happened to a settled load response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was issued while this one was in flight.
    Discarded,
}

/// Drives the sensor API and writes results into the [`Store`].
///
/// Loads are never de-duplicated or cancelled. With
/// [`LoadOrdering::LatestIssued`] each load carries a sequence number and a
/// response is dropped if a newer load was issued after it, so the store
/// always ends on the most recently issued request. With
/// [`LoadOrdering::LastSettled`] whichever response lands last wins, even if
/// it belongs to an older request.
///
/// There is no request timeout: a response that never arrives leaves
/// `sync.loading` set until the next load.
#[derive(Clone)]
pub struct SyncController {
    api: ApiClient,
    store: Store,
    ordering: LoadOrdering,
    issued: Arc<AtomicU64>,
}

impl SyncController {
    pub fn new(api: ApiClient, store: Store, ordering: LoadOrdering) -> Self {
        Self {
            api,
            store,
            ordering,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fetch the full collection and replace the store's copy.
    ///
    /// On failure the previous collection stays in place and `sync.error`
    /// is set to [`LOAD_ERROR_MESSAGE`]. The error is also returned for
    /// callers that want the detail.
    pub async fn load(&self) -> Result<LoadOutcome, ApiError> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.set_sync(SyncState::loading());
        tracing::debug!(seq, "Loading sensors");

        let result = self.api.list().await;

        if !self.is_current(seq) {
            tracing::debug!(
                seq,
                latest = self.issued.load(Ordering::SeqCst),
                ok = result.is_ok(),
                "Discarding stale load response"
            );
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok(sensors) => {
                tracing::info!(seq, count = sensors.len(), "Sensors loaded");
                // An error from an overlapping attempt stays until the
                // next attempt starts.
                self.store.apply_load(sensors);
                Ok(LoadOutcome::Applied)
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, kind = err.error_type(), "Failed to load sensors");
                self.store.set_sync(SyncState::failed(LOAD_ERROR_MESSAGE));
                Err(err)
            }
        }
    }

    /// Validate `draft`, POST it, then reset the form and reload.
    ///
    /// Validation failures never reach the network. A failed POST leaves the
    /// form and `sync.error` as they were.
    pub async fn create(&self, draft: &FormDraft) -> Result<(), ActionError> {
        let sensor = draft.validate()?;
        tracing::info!(nombre = %sensor.nombre, tipo = %sensor.tipo, "Creating sensor");

        if let Err(source) = self.api.create(&sensor).await {
            tracing::warn!(error = %source, "Failed to create sensor");
            return Err(ActionError::Create { source });
        }

        self.store.set_form(FormDraft::default());
        // Failures are recorded in the store by `load` itself.
        let _ = self.load().await;
        Ok(())
    }

    /// Delete an already-confirmed sensor, then reload whatever the outcome.
    pub async fn delete(&self, id: &SensorId) -> Result<(), ActionError> {
        tracing::info!(%id, "Deleting sensor");
        let result = self.api.delete(id).await;
        if let Err(err) = &result {
            tracing::warn!(%id, error = %err, "Failed to delete sensor");
        }

        let _ = self.load().await;

        result.map_err(|source| ActionError::Delete {
            id: id.clone(),
            source,
        })
    }

    fn is_current(&self, seq: u64) -> bool {
        match self.ordering {
            LoadOrdering::LatestIssued => self.issued.load(Ordering::SeqCst) == seq,
            LoadOrdering::LastSettled => true,
        }
    }
}
