//! The surface the render layer talks to.
//!
//! The render layer reads [`DashboardView`] snapshots and calls the `on_*`
//! intents. Two channels flow the other way: transient [`Notice`]s and
//! [`DeleteConfirmation`] requests that the render layer must answer before
//! a delete is issued.

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::sensor::{Filter, FormDraft, FormField, Sensor, SensorId};
use crate::store::{DashboardState, Store};
use crate::sync::{ActionError, SyncController};
use crate::view::{self, EmptyState};

/// Read-only, display-ready view of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Sensors passing the current filter.
    pub sensors: Vec<Sensor>,
    /// Size of the unfiltered collection.
    pub total: usize,
    pub form: FormDraft,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: Filter,
    pub empty_state: Option<EmptyState>,
    pub show_loading_placeholder: bool,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let loading = state.sync.loading;
        Self {
            sensors: view::visible(&state.sensors, state.filter)
                .into_iter()
                .cloned()
                .collect(),
            total: state.sensors.len(),
            form: state.form.clone(),
            loading,
            error: state.sync.error.clone(),
            filter: state.filter,
            empty_state: view::empty_state(&state.sensors, state.filter, loading),
            show_loading_placeholder: view::show_loading_placeholder(&state.sensors, loading),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    CreateFailed,
    DeleteFailed,
}

/// One-shot message for the user. Not stored anywhere once delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl From<&ActionError> for Notice {
    fn from(err: &ActionError) -> Self {
        let kind = match err {
            ActionError::Validation(_) => NoticeKind::Validation,
            ActionError::Create { .. } => NoticeKind::CreateFailed,
            ActionError::Delete { .. } => NoticeKind::DeleteFailed,
        };
        Self {
            kind,
            message: err.user_message(),
        }
    }
}

/// A pending "really delete?" question.
///
/// Answer with [`confirm`](Self::confirm) or [`cancel`](Self::cancel).
/// Dropping it unanswered counts as a cancel.
#[derive(Debug)]
pub struct DeleteConfirmation {
    pub id: SensorId,
    /// Name from the snapshot at request time, if the sensor was present.
    pub nombre: Option<String>,
    respond_to: oneshot::Sender<bool>,
}

impl DeleteConfirmation {
    pub fn prompt(&self) -> String {
        match &self.nombre {
            Some(nombre) => format!("Delete {}?", nombre),
            None => format!("Delete sensor {}?", self.id),
        }
    }

    pub fn confirm(self) {
        let _ = self.respond_to.send(true);
    }

    pub fn cancel(self) {
        let _ = self.respond_to.send(false);
    }
}

/// Receiving ends handed to the render layer.
pub struct DashboardChannels {
    pub notices: mpsc::UnboundedReceiver<Notice>,
    pub confirmations: mpsc::UnboundedReceiver<DeleteConfirmation>,
}

/// Intent entry points. Network work is spawned on `runtime`; the returned
/// handles resolve once the operation (and any follow-up reload) settles.
#[derive(Clone)]
pub struct Dashboard {
    controller: SyncController,
    runtime: Handle,
    notices: mpsc::UnboundedSender<Notice>,
    confirmations: mpsc::UnboundedSender<DeleteConfirmation>,
}

impl Dashboard {
    pub fn new(controller: SyncController, runtime: Handle) -> (Self, DashboardChannels) {
        let (notices_tx, notices_rx) = mpsc::unbounded_channel();
        let (confirm_tx, confirm_rx) = mpsc::unbounded_channel();
        let dashboard = Self {
            controller,
            runtime,
            notices: notices_tx,
            confirmations: confirm_tx,
        };
        let channels = DashboardChannels {
            notices: notices_rx,
            confirmations: confirm_rx,
        };
        (dashboard, channels)
    }

    pub fn store(&self) -> &Store {
        self.controller.store()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(&self.store().snapshot())
    }

    pub fn on_load(&self) -> JoinHandle<()> {
        let controller = self.controller.clone();
        self.runtime.spawn(async move {
            // The store carries the outcome.
            let _ = controller.load().await;
        })
    }

    pub fn on_form_change(&self, field: FormField, value: impl Into<String>) {
        self.store().edit_form(field, value);
    }

    /// Submit `draft`. An invalid draft is reported synchronously as a
    /// notice and nothing is spawned.
    pub fn on_submit(&self, draft: FormDraft) -> Option<JoinHandle<()>> {
        if let Err(err) = draft.validate() {
            tracing::debug!(error = %err, "Draft rejected");
            self.notify(&ActionError::Validation(err));
            return None;
        }

        let controller = self.controller.clone();
        let notices = self.notices.clone();
        Some(self.runtime.spawn(async move {
            if let Err(err) = controller.create(&draft).await {
                let _ = notices.send(Notice::from(&err));
            }
        }))
    }

    /// Ask the render layer to confirm, then delete if it agrees.
    pub fn on_delete(&self, id: SensorId) -> JoinHandle<()> {
        let nombre = self
            .store()
            .snapshot()
            .find(&id)
            .map(|s| s.nombre.clone());
        let (respond_to, answer) = oneshot::channel();
        let request = DeleteConfirmation {
            id: id.clone(),
            nombre,
            respond_to,
        };
        if self.confirmations.send(request).is_err() {
            tracing::warn!(%id, "No one to confirm delete, ignoring");
        }

        let controller = self.controller.clone();
        let notices = self.notices.clone();
        self.runtime.spawn(async move {
            match answer.await {
                Ok(true) => {
                    if let Err(err) = controller.delete(&id).await {
                        let _ = notices.send(Notice::from(&err));
                    }
                }
                _ => tracing::debug!(%id, "Delete cancelled"),
            }
        })
    }

    pub fn on_filter_change(&self, filter: Filter) {
        self.store().set_filter(filter);
    }

    fn notify(&self, err: &ActionError) {
        let _ = self.notices.send(Notice::from(err));
    }
}
