//! Message area rendering at the bottom of the screen.

use crate::playground::state::{MessageLevel, PlaygroundState};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINT: &str = "F1 help  Tab switch field  Ctrl-y copy result  Ctrl-q quit";

/// Renders the message area.
///
/// Displays the current message colored by level, or a key hint when there
/// is no message.
pub fn render_message_area(f: &mut Frame, area: Rect, state: &PlaygroundState, colors: &ThemeColors) {
    let content = if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        )])
    } else {
        Line::from(vec![Span::styled(
            KEY_HINT,
            Style::default().fg(colors.placeholder),
        )])
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
