//! The editable JSON document pane.
//!
//! Shows the document with optional line numbers and a block cursor when the
//! pane has focus. When the document is not valid JSON the border turns the
//! error color and the diagnostic is printed on the bottom border.

use super::cursor_line::{cursor_spans, horizontal_offset, scrolled};
use crate::playground::focus::Focus;
use crate::playground::state::PlaygroundState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the document pane.
///
/// Takes `&mut PlaygroundState` so the scroll offset can follow the cursor.
pub fn render_document_pane(
    f: &mut Frame,
    area: Rect,
    state: &mut PlaygroundState,
    colors: &ThemeColors,
) {
    let focused = state.focus() == Focus::Document;
    let view = state.view();
    let invalid = view.document_invalid;
    let error_text = view.error_text.map(str::to_string);

    let border_color = if invalid {
        colors.error
    } else if focused {
        colors.focused_border
    } else {
        colors.border
    };

    let mut block = Block::default()
        .title(" JSON Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.background));
    if let Some(error) = error_text {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
        )));
    }

    let inner = block.inner(area);
    state.adjust_document_scroll(inner.height as usize);

    let buffer = state.document_buffer();
    let cursor = buffer.cursor();
    let gutter_width = if state.show_line_numbers() {
        buffer.line_count().to_string().len() + 1
    } else {
        0
    };
    let text_width = (inner.width as usize).saturating_sub(gutter_width);
    let offset = if focused {
        horizontal_offset(cursor.column, text_width)
    } else {
        0
    };

    let text_style = Style::default().fg(colors.foreground);
    let cursor_style = Style::default().fg(colors.background).bg(colors.cursor);
    let gutter_style = Style::default().fg(colors.placeholder);

    let lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(state.document_scroll())
        .take(inner.height as usize)
        .map(|(idx, text)| {
            let mut spans = Vec::new();
            if gutter_width > 0 {
                spans.push(Span::styled(
                    format!("{:>width$} ", idx + 1, width = gutter_width - 1),
                    gutter_style,
                ));
            }
            if focused && idx == cursor.line {
                spans.extend(cursor_spans(
                    text,
                    cursor.column,
                    offset,
                    text_style,
                    cursor_style,
                ));
            } else {
                spans.push(Span::styled(scrolled(text, offset), text_style));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
