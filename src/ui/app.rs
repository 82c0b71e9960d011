use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::dashboard::{Dashboard, DashboardView, DeleteConfirmation, Notice};
use crate::sensor::{FormField, SensorId, SensorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Field(FormField),
    List,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Field(FormField::Nombre),
        Focus::Field(FormField::Tipo),
        Focus::Field(FormField::Valor),
        Focus::List,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Terminal-side state: focus, list cursor, pending confirmations and the
/// current notice. Sensor data is always read from the dashboard.
pub struct App {
    dashboard: Dashboard,
    should_quit: bool,
    focus: Focus,
    selection: usize,
    confirmations: VecDeque<DeleteConfirmation>,
    notice: Option<(Notice, Instant)>,
    notice_ttl: Duration,
    tick: usize,
}

impl App {
    pub fn new(dashboard: Dashboard, notice_ttl: Duration) -> Self {
        Self {
            dashboard,
            should_quit: false,
            focus: Focus::Field(FormField::Nombre),
            selection: 0,
            confirmations: VecDeque::new(),
            notice: None,
            notice_ttl,
            tick: 0,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn view(&self) -> DashboardView {
        self.dashboard.view()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % Focus::ORDER.len();
        self.focus = Focus::ORDER[next];
    }

    pub fn focus_prev(&mut self) {
        let len = Focus::ORDER.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = Focus::ORDER[prev];
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.dashboard.view().sensors.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn selected_sensor_id(&self) -> Option<SensorId> {
        self.dashboard
            .view()
            .sensors
            .get(self.selection)
            .map(|s| s.id.clone())
    }

    /// Append a typed character to the focused text field.
    pub fn type_char(&mut self, ch: char) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        let accepted = match field {
            FormField::Nombre => !ch.is_control(),
            FormField::Valor => ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'),
            FormField::Tipo => false,
        };
        if !accepted {
            return;
        }
        let mut value = self.dashboard.view().form.field(field).to_string();
        value.push(ch);
        self.dashboard.on_form_change(field, value);
    }

    pub fn backspace(&mut self) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        let mut value = self.dashboard.view().form.field(field).to_string();
        if value.pop().is_none() {
            return;
        }
        self.dashboard.on_form_change(field, value);
    }

    /// Step the tipo selector through "" and the creatable kinds.
    pub fn cycle_tipo(&mut self, direction: i32) {
        let options: Vec<String> = std::iter::once(String::new())
            .chain(SensorKind::CREATABLE.into_iter().map(String::from))
            .collect();

        let current = self.dashboard.view().form.tipo;
        let index = options.iter().position(|o| *o == current).unwrap_or(0);
        let len = options.len();
        let next = if direction.is_negative() {
            (index + len - 1) % len
        } else {
            (index + 1) % len
        };
        self.dashboard
            .on_form_change(FormField::Tipo, options[next].clone());
    }

    pub fn submit(&mut self) {
        let draft = self.dashboard.view().form;
        let _ = self.dashboard.on_submit(draft);
    }

    pub fn reload(&mut self) {
        let _ = self.dashboard.on_load();
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_sensor_id() {
            let _ = self.dashboard.on_delete(id);
        }
    }

    pub fn cycle_filter(&mut self) {
        let next = self.dashboard.view().filter.next();
        self.dashboard.on_filter_change(next);
        self.selection = 0;
    }

    pub fn on_confirmation(&mut self, request: DeleteConfirmation) {
        self.confirmations.push_back(request);
    }

    pub fn pending_confirmation(&self) -> Option<&DeleteConfirmation> {
        self.confirmations.front()
    }

    pub fn answer_confirmation(&mut self, confirmed: bool) {
        if let Some(request) = self.confirmations.pop_front() {
            if confirmed {
                request.confirm();
            } else {
                request.cancel();
            }
        }
    }

    pub fn on_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(notice, _)| notice)
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some((_, shown_at)) = &self.notice {
            if shown_at.elapsed() >= self.notice_ttl {
                self.notice = None;
            }
        }
    }

    /// Keep the cursor inside the list after the collection changes.
    pub fn on_state_changed(&mut self) {
        let len = self.dashboard.view().sensors.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
