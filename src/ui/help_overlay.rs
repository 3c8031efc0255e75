//! Help overlay for displaying key bindings and GJSON syntax.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Switch between query and document"),
    ("Enter", "New line (document) / jump to document (query)"),
    ("Arrows Home End", "Move cursor"),
    ("PgUp / PgDn", "Move document cursor by a page"),
    ("Backspace / Del", "Delete backward / forward (Ctrl-h also deletes)"),
    ("Ctrl-n", "Indent (document)"),
    ("Ctrl-u", "Clear the focused field"),
    ("Ctrl-r", "Restore the example document and query"),
    ("Ctrl-y", "Copy the result to the clipboard"),
    ("Ctrl-t", "Next color theme"),
    ("F1", "Toggle this help"),
    ("Ctrl-q / Ctrl-c", "Quit"),
];

const SYNTAX_EXAMPLES: &[(&str, &str)] = &[
    ("name.last", "\"Anderson\""),
    ("age", "37"),
    ("children", "[\"Sara\",\"Alex\",\"Jack\"]"),
    ("children.#", "3"),
    ("children.1", "\"Alex\""),
    ("child*.2", "\"Jack\""),
    ("c?ildren.0", "\"Sara\""),
    ("fav\\.movie", "\"Deer Hunter\""),
    ("friends.#.first", "[\"Dale\",\"Roger\",\"Jane\"]"),
    ("friends.1.last", "\"Craig\""),
    ("friends.#(last==\"Murphy\").first", "\"Dale\""),
    ("friends.#(last==\"Murphy\")#.first", "[\"Dale\",\"Jane\"]"),
    ("friends.#(age>45)#.last", "[\"Craig\",\"Murphy\"]"),
];

fn section<'a>(title: &'a str, colors: &ThemeColors) -> Line<'a> {
    Line::from(vec![Span::styled(
        title,
        Style::default().fg(colors.key).add_modifier(Modifier::BOLD),
    )])
}

fn entry<'a>(left: &'a str, right: &'a str, width: usize, colors: &ThemeColors) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", left, width = width),
            Style::default().fg(colors.number),
        ),
        Span::raw(right),
    ])
}

/// Builds the help text lines.
pub fn help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(""), section("Keys", colors)];
    lines.extend(
        KEY_BINDINGS
            .iter()
            .map(|(key, action)| entry(key, action, 18, colors)),
    );

    lines.push(Line::from(""));
    lines.push(section("GJSON Syntax (against the example document)", colors));
    lines.extend(
        SYNTAX_EXAMPLES
            .iter()
            .map(|(path, result)| entry(path, result, 36, colors)),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::raw(
        "  Full reference: https://github.com/tidwall/gjson/blob/master/SYNTAX.md",
    )]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "  j/k or arrows to scroll, Esc or F1 to close",
        Style::default().fg(colors.placeholder),
    )]));
    lines
}

/// Renders a centered help overlay showing key bindings and GJSON syntax.
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors, scroll: usize) {
    let area = centered_rect(80, 85, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" QueryQuill Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.info))
        .style(Style::default().bg(colors.background));

    let paragraph = Paragraph::new(help_lines(colors))
        .block(block)
        .style(Style::default().fg(colors.foreground))
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));

    f.render_widget(paragraph, area);
}

/// Returns a rectangle centered in `r` taking the given percentages.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{evaluate, EXAMPLE_DOCUMENT};

    /// The cheat sheet must stay truthful against the example document.
    #[test]
    fn test_syntax_examples_match_example_document() {
        for (path, expected) in SYNTAX_EXAMPLES {
            let result = evaluate(EXAMPLE_DOCUMENT, path);
            assert!(result.found, "{} should match", path);
            let expected = expected.trim_matches('"');
            let actual: String = result.value.split_whitespace().collect();
            let expected: String = expected.split_whitespace().collect();
            assert_eq!(actual, expected, "path {}", path);
        }
    }

    #[test]
    fn test_help_lines_include_sections() {
        let lines = help_lines(&ThemeColors::default_dark());
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Keys"));
        assert!(text.contains("GJSON Syntax"));
    }
}
