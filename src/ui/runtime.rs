use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::oneshot;

use crate::api::ApiClient;
use crate::config::Config;
use crate::dashboard::{Dashboard, DashboardChannels};
use crate::store::Store;
use crate::sync::SyncController;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the dashboard until the user quits.
///
/// Network work runs on a single-threaded tokio runtime parked on a
/// background thread; the terminal loop stays on the calling thread.
pub fn run(config: Config) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.api).context("Failed to build API client")?;
    tracing::info!(base_url = %api.base_url(), "Starting dashboard");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let runtime_thread = thread::Builder::new()
        .name("sensorflow-sync".into())
        .spawn(move || {
            let _ = runtime.block_on(stop_rx);
        })
        .context("Failed to spawn runtime thread")?;

    let controller = SyncController::new(api, Store::new(), config.sync.load_ordering);
    let (dashboard, channels) = Dashboard::new(controller, handle.clone());

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let DashboardChannels {
        mut notices,
        mut confirmations,
    } = channels;
    let notice_tx = events.sender();
    handle.spawn(async move {
        while let Some(notice) = notices.recv().await {
            if notice_tx.send(AppEvent::Notice(notice)).is_err() {
                break;
            }
        }
    });
    let confirm_tx = events.sender();
    handle.spawn(async move {
        while let Some(request) = confirmations.recv().await {
            if confirm_tx.send(AppEvent::Confirm(request)).is_err() {
                break;
            }
        }
    });

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(dashboard, Duration::from_secs(config.ui.notice_seconds));
    let state_tx = events.sender();
    let _subscription = app.dashboard().store().subscribe(move |_| {
        let _ = state_tx.send(AppEvent::StateChanged);
    });
    app.reload();

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    drop(guard);
    let _ = stop_tx.send(());
    if runtime_thread.join().is_err() {
        tracing::warn!("Runtime thread panicked");
    }
    tracing::info!("Dashboard stopped");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::StateChanged) => app.on_state_changed(),
            Ok(AppEvent::Notice(notice)) => app.on_notice(notice),
            Ok(AppEvent::Confirm(request)) => app.on_confirmation(request),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
