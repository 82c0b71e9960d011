//! Key handling: keys become dashboard intents through the App.

mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{controller, sensor, wait_until};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sensorflow::config::LoadOrdering;
use sensorflow::dashboard::{Dashboard, DashboardChannels, NoticeKind};
use sensorflow::sensor::{Filter, FormField, SensorKind};
use sensorflow::ui::app::{App, Focus};
use sensorflow::ui::input::handle_key;
use std::time::Duration;
use tokio::runtime::Handle;

fn make_app(api: &MockApi) -> (App, DashboardChannels) {
    let sync = controller(&api.base_url(), LoadOrdering::LatestIssued);
    let (dashboard, channels) = Dashboard::new(sync, Handle::current());
    (App::new(dashboard, Duration::from_secs(4)), channels)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[tokio::test]
async fn test_typing_fills_focused_field() {
    let api = MockApi::start().await;
    let (mut app, _channels) = make_app(&api);

    type_str(&mut app, "Sala");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "2x1.5");

    let form = app.view().form;
    assert_eq!(form.nombre, "Sal");
    assert_eq!(form.tipo, "Temperatura");
    // Non-numeric characters are ignored in valor.
    assert_eq!(form.valor, "21.5");
}

#[tokio::test]
async fn test_tipo_selector_wraps_through_blank() {
    let api = MockApi::start().await;
    let (mut app, _channels) = make_app(&api);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Field(FormField::Tipo));

    press(&mut app, KeyCode::Left);
    assert_eq!(app.view().form.tipo, "Luz");
    press(&mut app, KeyCode::Right);
    assert_eq!(app.view().form.tipo, "");
    type_str(&mut app, "abc");
    assert_eq!(app.view().form.tipo, "");
}

#[tokio::test]
async fn test_focus_cycles_through_list() {
    let api = MockApi::start().await;
    let (mut app, _channels) = make_app(&api);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::List);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Field(FormField::Nombre));
}

#[tokio::test]
async fn test_enter_on_blank_form_shows_notice_locally() {
    let api = MockApi::start().await;
    let (mut app, mut channels) = make_app(&api);

    press(&mut app, KeyCode::Enter);

    let notice = channels.notices.try_recv().unwrap();
    assert_eq!(notice.kind, NoticeKind::Validation);
    app.on_notice(notice);
    assert!(app.notice().is_some());
    assert!(api.captured_requests().await.is_empty());
}

#[tokio::test]
async fn test_enter_submits_valid_form() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::created("{}")).await;
    api.enqueue_response(MockResponse::json(
        r#"[{"id":1,"nombre":"Patio","tipo":"Luz","valor":300}]"#,
    ))
    .await;
    let (mut app, _channels) = make_app(&api);

    type_str(&mut app, "Patio");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "300");
    press(&mut app, KeyCode::Enter);

    let dashboard = app.dashboard().clone();
    assert!(wait_until(Duration::from_secs(2), || {
        let dashboard = dashboard.clone();
        async move { dashboard.view().total == 1 }
    })
    .await);
    assert_eq!(app.view().form.nombre, "");
    assert_eq!(api.captured_requests().await[0].method, "POST");
}

#[tokio::test]
async fn test_list_keys_move_selection_and_filter() {
    let api = MockApi::start().await;
    let (mut app, _channels) = make_app(&api);
    app.dashboard().store().set_sensors(vec![
        sensor(1, "Sala", SensorKind::Temperatura, 22.0),
        sensor(2, "Patio", SensorKind::Luz, 300.0),
        sensor(3, "Baño", SensorKind::Humedad, 70.0),
    ]);
    press(&mut app, KeyCode::BackTab);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selection(), 2);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selection(), 0);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_sensor_id(), Some(3_i64.into()));

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.view().filter, Filter::Temperatura);
    assert_eq!(app.selection(), 0);
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.view().filter, Filter::Humedad);
}

#[tokio::test]
async fn test_delete_key_asks_then_cancel_keeps_sensor() {
    let api = MockApi::start().await;
    let (mut app, mut channels) = make_app(&api);
    app.dashboard()
        .store()
        .set_sensors(vec![sensor(5, "Sala", SensorKind::Temperatura, 22.0)]);
    press(&mut app, KeyCode::BackTab);

    press(&mut app, KeyCode::Char('d'));
    let request = channels.confirmations.recv().await.unwrap();
    app.on_confirmation(request);
    assert!(app.pending_confirmation().is_some());

    // Captured by the prompt, not the list.
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('n'));
    assert!(app.pending_confirmation().is_none());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(api.captured_requests().await.is_empty());
}

#[tokio::test]
async fn test_confirm_key_issues_delete() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::no_content()).await;
    api.enqueue_response(MockResponse::json("[]")).await;
    let (mut app, mut channels) = make_app(&api);
    app.dashboard()
        .store()
        .set_sensors(vec![sensor(5, "Sala", SensorKind::Temperatura, 22.0)]);
    press(&mut app, KeyCode::BackTab);

    press(&mut app, KeyCode::Delete);
    let request = channels.confirmations.recv().await.unwrap();
    app.on_confirmation(request);
    press(&mut app, KeyCode::Char('y'));

    let api_ref = &api;
    assert!(wait_until(Duration::from_secs(2), || async move {
        api_ref.captured_requests().await.len() == 2
    })
    .await);
    assert_eq!(api.calls().await[0].1, "/api/sensores/5");
}

#[tokio::test]
async fn test_quit_keys() {
    let api = MockApi::start().await;

    let (mut app, _channels) = make_app(&api);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());

    // 'q' is text while a form field has focus.
    let (mut app, _channels) = make_app(&api);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.view().form.nombre, "q");
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_release_events_are_ignored() {
    let api = MockApi::start().await;
    let (mut app, _channels) = make_app(&api);
    let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;

    handle_key(&mut app, key);

    assert_eq!(app.view().form.nombre, "");
}

#[tokio::test]
async fn test_notice_expires_on_tick() {
    let api = MockApi::start().await;
    let sync = controller(&api.base_url(), LoadOrdering::LatestIssued);
    let (dashboard, mut channels) = Dashboard::new(sync, Handle::current());
    let mut app = App::new(dashboard, Duration::from_millis(20));

    press(&mut app, KeyCode::Enter);
    app.on_notice(channels.notices.try_recv().unwrap());
    app.on_tick();
    assert!(app.notice().is_some());

    tokio::time::sleep(Duration::from_millis(40)).await;
    app.on_tick();
    assert!(app.notice().is_none());
}
