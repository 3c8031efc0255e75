//! Status line widget for displaying playground state information.
//!
//! The status line shows:
//! - Focused field (QUERY, DOCUMENT)
//! - Filename (or "[No Name]" for the example or piped input)
//! - Dirty indicator "[+]" once the document differs from what was loaded
//! - Evaluation outcome (FOUND, NOT FOUND, EMPTY, INVALID)
//! - Cursor position in the focused field
//!
//! Example status line: `QUERY | data.json [+]  FOUND               Ln 1, Col 10`

use crate::playground::focus::Focus;
use crate::playground::state::PlaygroundState;
use crate::query::Outcome;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line.
///
/// # Arguments
///
/// * `f` - The ratatui frame to render into
/// * `area` - The rectangular area to render the status line in
/// * `state` - The playground state
/// * `colors` - Theme colors for styling the status line
pub fn render_status_line(f: &mut Frame, area: Rect, state: &PlaygroundState, colors: &ThemeColors) {
    let mode_and_file = format!(
        "{} | {}",
        state.focus(),
        state.filename().unwrap_or("[No Name]")
    );
    let dirty_indicator = if state.is_dirty() { " [+]" } else { "" };

    let outcome = state.evaluation().outcome();
    let outcome_text = format!("  {}", outcome);
    let outcome_color = match outcome {
        Outcome::Found => colors.string,
        Outcome::Empty => colors.status_line_fg,
        Outcome::NotFound => colors.warning,
        Outcome::Invalid => colors.error,
    };

    let cursor = match state.focus() {
        Focus::Query => state.query_buffer().cursor(),
        Focus::Document => state.document_buffer().cursor(),
    };
    let position = format!("Ln {}, Col {}", cursor.line + 1, cursor.column + 1);

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let left_len = mode_and_file.chars().count() + dirty_indicator.len() + outcome_text.len();
    let position_len = position.len();

    // Ensure we don't overflow
    let padding = if left_len + position_len + 1 < total_width {
        total_width - left_len - position_len
    } else {
        1
    };

    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let outcome_style = Style::default()
        .fg(outcome_color)
        .bg(colors.status_line_bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(mode_and_file, default_style)];
    if !dirty_indicator.is_empty() {
        spans.push(Span::styled(dirty_indicator, default_style));
    }
    spans.push(Span::styled(outcome_text, outcome_style));
    spans.push(Span::styled(" ".repeat(padding), default_style));
    spans.push(Span::styled(position, default_style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &PlaygroundState) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_status_line(f, area, state, &theme.colors);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_line_no_filename() {
        let state = PlaygroundState::example("default-dark".to_string());
        let text = draw(&state);
        assert!(
            text.contains("[No Name]"),
            "Status line should show [No Name]: {}",
            text
        );
        assert!(text.contains("QUERY"));
        assert!(text.contains("FOUND"));
        assert!(text.contains("Ln 1, Col 10"));
    }

    #[test]
    fn test_status_line_with_filename_and_outcome() {
        let mut state =
            PlaygroundState::new_with_default_theme("{oops".to_string(), "a".to_string());
        state.set_filename("test.json".to_string());
        let text = draw(&state);
        assert!(text.contains("test.json"));
        assert!(text.contains("INVALID"));
    }
}
