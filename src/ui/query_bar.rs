//! The single-line GJSON path input at the top of the screen.

use super::cursor_line::{cursor_spans, horizontal_offset};
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

const PLACEHOLDER: &str = "Enter GJSON path...";

/// Renders the query bar with its border, title, and cursor.
///
/// An empty query shows a placeholder. The cursor is drawn only while the
/// query bar has focus.
pub fn render_query_bar(f: &mut Frame, area: Rect, state: &PlaygroundState, colors: &ThemeColors) {
    let focused = state.focus() == Focus::Query;
    let border_color = if focused {
        colors.focused_border
    } else {
        colors.border
    };

    let block = Block::default()
        .title(" GJSON Path ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.background));

    let inner_width = block.inner(area).width as usize;
    let buffer = state.query_buffer();
    let text = buffer.text();
    let text_style = Style::default()
        .fg(colors.foreground)
        .add_modifier(Modifier::BOLD);
    let cursor_style = Style::default().fg(colors.background).bg(colors.cursor);

    let line = if text.is_empty() {
        let placeholder = Span::styled(PLACEHOLDER, Style::default().fg(colors.placeholder));
        if focused {
            Line::from(vec![Span::styled(" ", cursor_style), placeholder])
        } else {
            Line::from(placeholder)
        }
    } else if focused {
        let column = buffer.cursor().column;
        let offset = horizontal_offset(column, inner_width);
        Line::from(cursor_spans(&text, column, offset, text_style, cursor_style))
    } else {
        Line::from(Span::styled(text, text_style))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}
