//! Spans for a line of text with a block cursor.

use ratatui::{style::Style, text::Span};

/// Splits `line` into spans with the character at `cursor` highlighted.
///
/// `offset` characters are skipped from the left, for fields narrower than
/// their content. A cursor past the end of the line highlights a space.
pub fn cursor_spans(
    line: &str,
    cursor: usize,
    offset: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    let chars: Vec<char> = line.chars().collect();
    let cursor = cursor.min(chars.len());
    let offset = offset.min(cursor);

    let before: String = chars[offset..cursor].iter().collect();
    let at_cursor = chars.get(cursor).copied().unwrap_or(' ');
    let after: String = chars.iter().skip(cursor + 1).collect();

    let mut spans = vec![
        Span::styled(before, text_style),
        Span::styled(at_cursor.to_string(), cursor_style),
    ];
    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }
    spans
}

/// Skips the first `offset` characters of `line`.
pub fn scrolled(line: &str, offset: usize) -> String {
    line.chars().skip(offset).collect()
}

/// Horizontal offset that keeps `cursor` inside a field `width` cells wide.
pub fn horizontal_offset(cursor: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    cursor.saturating_sub(width - 1)
}
