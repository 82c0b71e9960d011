use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::dashboard::{Notice, NoticeKind};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_WARN};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str =
    " Tab: Focus │ Enter: Add │ d: Delete │ f/F2: Filter │ r/F5: Reload │ Ctrl+Q: Quit";

/// Key hints, or the current notice while one is showing.
pub struct Footer<'a> {
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a Notice>) -> Self {
        Self { notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let (text, style) = match self.notice {
            Some(notice) => (format!(" ⚠ {}", notice.message), notice_style(notice.kind)),
            None => (
                HINTS.to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };

        // char count, not bytes: the hints contain box-drawing characters
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn notice_style(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Validation => Style::default().fg(STATUS_WARN),
        NoticeKind::CreateFailed | NoticeKind::DeleteFailed => {
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
        }
    }
}
