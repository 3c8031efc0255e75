//! The read-only result pane.

use crate::playground::state::PlaygroundState;
use crate::query::Outcome;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Picks a color for a result from its text.
///
/// The backend only hands back strings, so this is a best guess: `"37"` the
/// string and `37` the number look the same.
fn value_color(value: &str, colors: &ThemeColors) -> Color {
    match value {
        "true" | "false" => colors.boolean,
        "null" => colors.null,
        _ if value.starts_with('{') || value.starts_with('[') => colors.foreground,
        _ if value.parse::<f64>().is_ok() => colors.number,
        _ => colors.string,
    }
}

/// Renders the result pane with the "Value not found" banner when the query
/// misses.
pub fn render_result_pane(f: &mut Frame, area: Rect, state: &PlaygroundState, colors: &ThemeColors) {
    let view = state.view();

    let mut block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background));
    if view.show_not_found {
        block = block.title_bottom(Line::from(Span::styled(
            " Value not found ",
            Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
        )));
    }

    let text: Vec<Line> = match state.evaluation().outcome() {
        Outcome::Found => view
            .result_text
            .lines()
            .map(|line| {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(value_color(view.result_text, colors)),
                ))
            })
            .collect(),
        _ => Vec::new(),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
