//! Shared widgets: header, tab bar, notices, confirmation popup

use ratatui::{prelude::*, widgets::*};
use shared::CouponStatus;

use crate::action::{Confirm, Notice};
use crate::messages;

/// Split a view into header, tab bar, body, notice line and key hints
pub struct DashboardLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub notice: Rect,
    pub hints: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Body
            Constraint::Length(3), // Notice
            Constraint::Length(1), // Hints
        ])
        .split(area);
    DashboardLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        notice: chunks[3],
        hints: chunks[4],
    }
}

/// Rect of `percent_x`% by `percent_y`% centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn header(frame: &mut Frame, area: Rect, title: &str, user: &str, loading: bool) {
    let state = if loading {
        Span::styled(
            format!(" {} ", messages::LOADING),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };
    let line = Line::from(vec![
        Span::raw(" 🎟  "),
        Span::styled(
            title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(user.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        state,
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

pub fn tabs(frame: &mut Frame, area: Rect, titles: &[&str], selected: usize) {
    let widget = Tabs::new(titles.iter().map(|t| Line::from(*t)))
        .block(Block::default().borders(Borders::ALL))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    frame.render_widget(widget, area);
}

/// Inline message box; empty when there is nothing to say
pub fn notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let (text, style) = match notice {
        Some(n) if n.is_error() => (n.text.as_str(), Style::default().fg(Color::Red)),
        Some(n) => (n.text.as_str(), Style::default().fg(Color::Green)),
        None => ("", Style::default()),
    };
    let widget = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
        );
    frame.render_widget(widget, area);
}

/// One line of `key: action` pairs
pub fn hints(frame: &mut Frame, area: Rect, pairs: &[(&str, &str)]) {
    let spans: Vec<Span> = pairs
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key} "), Style::default().fg(Color::Black).bg(Color::Gray)),
                Span::styled(format!(" {action}  "), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn confirm(frame: &mut Frame, confirm: &Confirm) {
    let area = centered_rect(50, 25, frame.area());
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            confirm.prompt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" s/Enter ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" Sim   "),
            Span::styled(" n/Esc ", Style::default().fg(Color::Black).bg(Color::Red)),
            Span::raw(" Não"),
        ]),
    ];
    let widget = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" Confirmação ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

pub fn status_style(status: CouponStatus) -> Style {
    match status {
        CouponStatus::Used => Style::default().fg(Color::Red),
        CouponStatus::Expired => Style::default().fg(Color::Yellow),
        CouponStatus::Active => Style::default().fg(Color::Green),
    }
}

pub fn status_badge(status: CouponStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", status.label()),
        status_style(status).add_modifier(Modifier::BOLD),
    )
}

/// Placeholder paragraph for loading and empty lists
pub fn placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(widget, area);
}
