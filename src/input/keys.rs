//! Keyboard event mapping and input event types.

use crate::playground::focus::Focus;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (switch field, insert text, quit)
/// rather than specific key presses, so the two fields can bind keys
/// differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit the playground
    Quit,
    /// Move focus to the other field
    ToggleFocus,
    /// Insert a character into the focused field
    InsertCharacter(char),
    /// Enter: newline in the document, jump to the document from the query
    InsertNewline,
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// Move cursor up a line (document only)
    MoveUp,
    /// Move cursor down a line (document only)
    MoveDown,
    /// Move to the start of the line
    Home,
    /// Move to the end of the line
    End,
    /// Move the document cursor up a page
    PageUp,
    /// Move the document cursor down a page
    PageDown,
    /// Clear the focused field (Ctrl-u)
    ClearField,
    /// Insert indentation in the document (Ctrl-n)
    Indent,
    /// Restore the example document and query (Ctrl-r)
    ResetExample,
    /// Copy the current result to the clipboard (Ctrl-y)
    CopyResult,
    /// Switch to the next built-in theme (Ctrl-t)
    CycleTheme,
    /// Toggle help overlay
    Help,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on which field has focus.
///
/// Both fields share editing keys; Up/Down, PageUp/PageDown and Ctrl-n only
/// apply to the document.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use queryquill::playground::focus::Focus;
/// use queryquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Char('\t'));
/// assert_eq!(map_key_event(event, &Focus::Query), InputEvent::ToggleFocus);
///
/// let event = Event::Key(Key::Char('a'));
/// assert_eq!(map_key_event(event, &Focus::Document), InputEvent::InsertCharacter('a'));
/// ```
pub fn map_key_event(event: Event, focus: &Focus) -> InputEvent {
    // We only care about key events
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    // Keys that mean the same thing in both fields
    match key {
        Key::Ctrl('q') | Key::Ctrl('c') => return InputEvent::Quit,
        Key::Char('\t') | Key::BackTab => return InputEvent::ToggleFocus,
        Key::Ctrl('u') => return InputEvent::ClearField,
        Key::Ctrl('r') => return InputEvent::ResetExample,
        Key::Ctrl('y') => return InputEvent::CopyResult,
        Key::Ctrl('t') => return InputEvent::CycleTheme,
        Key::F(1) => return InputEvent::Help,
        Key::Char('\n') => return InputEvent::InsertNewline,
        // Some terminals send ^H for Backspace
        Key::Backspace | Key::Ctrl('h') => return InputEvent::Backspace,
        Key::Delete => return InputEvent::Delete,
        Key::Left => return InputEvent::MoveLeft,
        Key::Right => return InputEvent::MoveRight,
        Key::Home => return InputEvent::Home,
        Key::End => return InputEvent::End,
        _ => {}
    }

    match focus {
        Focus::Query => match key {
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
        Focus::Document => match key {
            Key::Up => InputEvent::MoveUp,
            Key::Down => InputEvent::MoveDown,
            Key::PageUp => InputEvent::PageUp,
            Key::PageDown => InputEvent::PageDown,
            Key::Ctrl('n') => InputEvent::Indent,
            Key::Char(c) => InputEvent::InsertCharacter(c),
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_down_ignored_in_query() {
        assert_eq!(
            map_key_event(Event::Key(Key::Up), &Focus::Query),
            InputEvent::Unknown
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Down), &Focus::Document),
            InputEvent::MoveDown
        );
    }

    #[test]
    fn test_quit_from_either_field() {
        for focus in [Focus::Query, Focus::Document] {
            assert_eq!(
                map_key_event(Event::Key(Key::Ctrl('q')), &focus),
                InputEvent::Quit
            );
            assert_eq!(
                map_key_event(Event::Key(Key::Ctrl('c')), &focus),
                InputEvent::Quit
            );
        }
    }

    #[test]
    fn test_ctrl_h_is_backspace() {
        for focus in [Focus::Query, Focus::Document] {
            assert_eq!(
                map_key_event(Event::Key(Key::Ctrl('h')), &focus),
                InputEvent::Backspace
            );
        }
    }

    #[test]
    fn test_plain_q_is_text() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), &Focus::Query),
            InputEvent::InsertCharacter('q')
        );
    }
}
