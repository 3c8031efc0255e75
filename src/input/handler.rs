//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::playground::state::{MessageLevel, PlaygroundState};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates playground state.
///
/// The InputHandler polls for termion events, converts them to
/// high-level InputEvents, and applies them to the state. Edits re-evaluate
/// the query as part of the state update.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Blocks until the next terminal event.
    ///
    /// Returns `None` when the input stream is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn poll_event(&mut self) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input buffer.
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates playground state.
    ///
    /// Returns true if the application should quit.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use queryquill::input::InputHandler;
    /// use queryquill::playground::state::PlaygroundState;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = PlaygroundState::example("default-dark".to_string());
    /// let should_quit = handler.handle_event(Event::Key(Key::Ctrl('q')), &mut state).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut PlaygroundState) -> Result<bool> {
        if state.show_help() {
            return Ok(handle_help_event(event, state));
        }

        let input_event = map_key_event(event, &state.focus());
        if input_event != InputEvent::Unknown {
            state.clear_message();
        }

        match input_event {
            InputEvent::Quit => return Ok(true),
            InputEvent::ToggleFocus => state.toggle_focus(),
            InputEvent::InsertCharacter(c) => state.insert_char(c),
            InputEvent::InsertNewline => state.insert_newline(),
            InputEvent::Backspace => state.backspace(),
            InputEvent::Delete => state.delete(),
            InputEvent::MoveLeft => state.move_left(),
            InputEvent::MoveRight => state.move_right(),
            InputEvent::MoveUp => state.move_up(),
            InputEvent::MoveDown => state.move_down(),
            InputEvent::Home => state.move_home(),
            InputEvent::End => state.move_end(),
            InputEvent::PageUp => state.page_up(),
            InputEvent::PageDown => state.page_down(),
            InputEvent::ClearField => state.clear_focused(),
            InputEvent::Indent => state.indent(),
            InputEvent::ResetExample => {
                state.reset_to_example();
                state.set_message("Restored example document".to_string(), MessageLevel::Info);
            }
            InputEvent::CopyResult => copy_result(state),
            InputEvent::CycleTheme => state.cycle_theme(),
            InputEvent::Help => state.toggle_help(),
            InputEvent::Unknown => {}
        }

        Ok(false)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys while the help overlay is open: scroll, close, or quit.
fn handle_help_event(event: Event, state: &mut PlaygroundState) -> bool {
    match event {
        Event::Key(Key::Ctrl('q')) | Event::Key(Key::Ctrl('c')) => return true,
        Event::Key(Key::Esc) | Event::Key(Key::F(1)) | Event::Key(Key::Char('q')) => {
            state.toggle_help()
        }
        Event::Key(Key::Down) | Event::Key(Key::Char('j')) => state.scroll_help_down(),
        Event::Key(Key::Up) | Event::Key(Key::Char('k')) => state.scroll_help_up(),
        _ => {}
    }
    false
}

/// Copies the current result to the system clipboard, reporting the outcome
/// in the message area.
fn copy_result(state: &mut PlaygroundState) {
    let text = state.evaluation().value().to_string();
    if text.is_empty() {
        state.set_message("Nothing to copy".to_string(), MessageLevel::Warning);
        return;
    }

    let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match copied {
        Ok(()) => state.set_message("Result copied to clipboard".to_string(), MessageLevel::Info),
        Err(err) => {
            tracing::warn!("clipboard copy failed: {}", err);
            state.set_message(format!("Clipboard error: {}", err), MessageLevel::Error);
        }
    }
}
