use crate::app::App;
use crate::document::slice_columns;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render the visible document and record its viewport size
pub fn render_document(frame: &mut Frame, app: &mut App, area: Rect) {
    let line_numbers = app.line_numbers;
    let scrollbar = app.scrollbar_visible;

    let Some(doc) = app.active_document_mut() else {
        let empty = Paragraph::new("No documents open")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let gutter_width: u16 = if line_numbers {
        doc.line_count().max(1).to_string().len() as u16 + 1
    } else {
        0
    };
    let scrollbar_width: u16 = if scrollbar { 1 } else { 0 };
    let text_cols = area
        .width
        .saturating_sub(gutter_width)
        .saturating_sub(scrollbar_width);

    doc.set_viewport(area.height, text_cols);

    let top = doc.top_line();
    let first_col = doc.first_column();
    let number_style = Style::default().fg(Color::DarkGray);

    let lines: Vec<Line> = doc
        .lines()
        .iter()
        .enumerate()
        .skip(top)
        .take(area.height as usize)
        .map(|(idx, text)| {
            let mut spans = Vec::with_capacity(2);
            if line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", idx + 1, width = gutter_width as usize - 1),
                    number_style,
                ));
            }
            spans.push(Span::raw(slice_columns(text, first_col, text_cols as usize)));
            Line::from(spans)
        })
        .collect();

    let text_area = Rect {
        width: area.width.saturating_sub(scrollbar_width),
        ..area
    };
    frame.render_widget(Paragraph::new(lines), text_area);

    if scrollbar {
        let max_top = doc.line_count().saturating_sub(area.height as usize);
        if max_top > 0 {
            let mut state = ScrollbarState::new(max_top + 1).position(top);
            let bar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_style(Style::default().fg(Color::DarkGray));
            frame.render_stateful_widget(bar, area, &mut state);
        }
    }
}
