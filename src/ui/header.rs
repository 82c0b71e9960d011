use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::dashboard::DashboardView;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Title, sync status and counts.
pub struct Header {
    tick: usize,
}

impl Header {
    pub fn new(tick: usize) -> Self {
        Self { tick }
    }

    pub fn widget(&self, view: &DashboardView) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled(
                "  SensorFlow",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];

        if view.loading {
            let spinner = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!("{} Loading...", spinner),
                Style::default().fg(STATUS_WARN),
            ));
        } else if view.error.is_none() {
            spans.push(Span::styled("● Synced", Style::default().fg(STATUS_OK)));
        }
        if let Some(error) = &view.error {
            if view.loading {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("⚠ {}", error),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(count_label(view), text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn count_label(view: &DashboardView) -> String {
    if view.sensors.len() == view.total {
        format!("{} sensors", view.total)
    } else {
        format!("{} of {} sensors", view.sensors.len(), view.total)
    }
}
