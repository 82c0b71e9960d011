use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::dashboard::DashboardView;
use crate::sensor::{Filter, FormField};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER,
    STATUS_WARN,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new(app.tick()).widget(&view), regions.header);
    draw_form(frame, app, &view, regions.form);
    frame.render_widget(filter_bar(view.filter), regions.filter);
    draw_list(frame, app, &view, regions.list);
    frame.render_widget(Footer::new(app.notice()).widget(regions.footer), regions.footer);

    if let Some(request) = app.pending_confirmation() {
        let lines = vec![
            Line::from(Span::styled(request.prompt(), Style::default().fg(HEADER_TEXT))),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(ACCENT)),
                Span::raw(" Yes   "),
                Span::styled("[n]", Style::default().fg(ACCENT)),
                Span::raw(" No"),
            ]),
        ];
        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = content_width.saturating_add(4).max(30);
        let height = lines.len().saturating_add(2) as u16;
        let area = centered_rect_by_size(width, height, regions.list);

        frame.render_widget(Clear, area);
        let popup = Block::default()
            .title(Span::styled("Confirm", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(lines).block(popup), area);
    }
}

fn draw_form(frame: &mut Frame<'_>, app: &App, view: &DashboardView, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (field, column) in FormField::ALL.into_iter().zip(columns.iter()) {
        let focused = app.focus() == Focus::Field(field);
        let value = view.form.field(field);
        let text = match field {
            FormField::Tipo if value.is_empty() => "< choose >".to_string(),
            FormField::Tipo => format!("< {} >", value),
            _ if focused => format!("{}▏", value),
            _ => value.to_string(),
        };
        let border = if focused { ACCENT } else { GLOBAL_BORDER };
        let block = Block::default()
            .title(Span::styled(field.name(), Style::default().fg(HEADER_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        frame.render_widget(Paragraph::new(text).block(block), *column);
    }
}

fn filter_bar(active: Filter) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        " Filter: ",
        Style::default().fg(HEADER_SEPARATOR),
    )];
    for filter in Filter::ALL {
        let style = if filter == active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!("[{}]", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn draw_list(frame: &mut Frame<'_>, app: &App, view: &DashboardView, area: Rect) {
    let list_focused = app.focus() == Focus::List;
    let border = if list_focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(" Sensors ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if view.show_loading_placeholder {
        let placeholder = Paragraph::new(Span::styled(
            " Loading sensors...",
            Style::default().fg(STATUS_WARN),
        ));
        frame.render_widget(placeholder.block(block), area);
        return;
    }
    if let Some(empty) = &view.empty_state {
        let message = Paragraph::new(Span::styled(
            format!(" {}", empty),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ));
        frame.render_widget(message.block(block), area);
        return;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.selection(), inner_height);
    let name_width = view
        .sensors
        .iter()
        .map(|s| s.nombre.chars().count())
        .max()
        .unwrap_or(0);
    let kind_width = view
        .sensors
        .iter()
        .map(|s| s.tipo.as_str().chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = view
        .sensors
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner_height)
        .map(|(idx, sensor)| {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", sensor.nombre, width = name_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(
                    format!("  {:<width$}", sensor.tipo.as_str(), width = kind_width),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
                Span::styled(
                    format!("  {}", sensor.reading()),
                    Style::default().fg(ACCENT),
                ),
            ]);
            if list_focused && idx == app.selection() {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// First visible row so that `selection` stays on screen.
fn scroll_offset(selection: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    selection.saturating_sub(visible_rows - 1)
}
