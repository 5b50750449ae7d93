//! UI rendering for the TUI

use crate::app::App;
use crate::views::render_document;
use glide_core::Axis;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main drawing function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let tabs_height = if app.is_multi_document() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(tabs_height), // Document tabs
            Constraint::Min(0),              // Main content
            Constraint::Length(1),           // Status bar
        ])
        .split(frame.area());

    if tabs_height > 0 {
        draw_tabs(frame, app, chunks[0]);
    }
    render_document(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.show_help {
        draw_help_popover(frame);
    }
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (idx, doc) in app.documents.iter().enumerate() {
        let style = if idx == app.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", doc.name), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let Some(doc) = app.active_document() else {
        return;
    };

    let muted = Style::default().fg(Color::DarkGray);
    let text = Style::default().fg(Color::Reset);

    let mut left_spans = vec![
        Span::styled(
            " GLIDE ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(doc.name.clone(), text),
    ];
    if app.is_gliding() {
        left_spans.push(Span::raw(" "));
        left_spans.push(Span::styled("●", Style::default().fg(Color::Yellow)));
    }

    let (rows, _) = doc.viewport();
    let last_visible = (doc.top_line() + rows as usize).min(doc.line_count());
    let mut right_spans = vec![
        Span::styled("ln ", muted),
        Span::styled(
            format!("{}-{}/{}", doc.top_line() + 1, last_visible, doc.line_count()),
            text,
        ),
    ];
    if doc.max_scroll(Axis::Horizontal) > 0 {
        right_spans.push(Span::styled("  col ", muted));
        right_spans.push(Span::styled(format!("{}", doc.first_column() + 1), text));
    }
    right_spans.push(Span::styled(format!("  {:>3}% ", doc.progress()), muted));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width: usize = right_spans.iter().map(|s| s.width()).sum();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.extend(right_spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popover(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 40u16.min(area.width.saturating_sub(4));
    let popup_height = 18u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let label_style = Style::default().fg(Color::Reset);
    let section_style = Style::default().fg(Color::Blue);

    let help_line = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::styled(desc.to_string(), label_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(" Scroll", section_style)),
        help_line("j / k / ↑↓", "Line down/up"),
        help_line("h / l / ←→", "Line left/right"),
        help_line("Space / b", "Page down/up"),
        help_line("^D / ^U", "Page down/up"),
        help_line("g / G", "Jump to top/bottom"),
        help_line("0 / $", "Jump to line start/end"),
        help_line("wheel", "Glide (shift: sideways)"),
        Line::from(""),
        Line::from(Span::styled(" Documents", section_style)),
        help_line("Tab / S-Tab", "Next/prev document"),
        help_line("x", "Close document"),
        help_line("n", "Toggle line numbers"),
        help_line("q", "Quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Help ");
    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
