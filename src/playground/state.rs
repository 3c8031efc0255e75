//! Playground state management.
//!
//! This module provides the `PlaygroundState` struct that manages all runtime
//! state for the terminal playground: the two input buffers, the evaluation
//! derived from them, which field has focus, and the transient UI flags.
//!
//! Every edit to a buffer is pushed into the [`EvaluationState`] straight away,
//! so the result shown on the next frame always matches what is on screen.
//!
//! # Example
//!
//! ```
//! use queryquill::playground::state::PlaygroundState;
//! use queryquill::playground::focus::Focus;
//! use queryquill::query::Outcome;
//!
//! let mut state = PlaygroundState::example("default-dark".to_string());
//! assert_eq!(state.focus(), Focus::Query);
//! assert_eq!(state.evaluation().value(), "Anderson");
//!
//! // Typing into the query re-evaluates immediately
//! state.backspace_n(4);
//! state.insert_str("first");
//! assert_eq!(state.query_buffer().text(), "name.first");
//! assert_eq!(state.evaluation().value(), "Tom");
//!
//! state.insert_str("x");
//! assert_eq!(state.evaluation().outcome(), Outcome::NotFound);
//! ```

use super::buffer::TextBuffer;
use super::focus::Focus;
use crate::query::{EvaluationState, PlaygroundView, EXAMPLE_DOCUMENT, EXAMPLE_QUERY};

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Number of spaces the indent key inserts unless configured otherwise.
const DEFAULT_INDENT_SIZE: usize = 2;

pub struct PlaygroundState {
    evaluation: EvaluationState,
    query: TextBuffer,
    document: TextBuffer,
    focus: Focus,
    filename: Option<String>,
    loaded_document: String,
    message: Option<Message>,
    show_help: bool,
    help_scroll: usize,
    document_scroll: usize,
    viewport_height: usize,
    current_theme: String,
    pending_theme: Option<String>,
    show_line_numbers: bool,
    indent_size: usize,
}

impl PlaygroundState {
    /// Creates a playground for the given inputs.
    ///
    /// The query field starts focused with its cursor at the end; the document
    /// cursor starts at the top.
    pub fn new(document: String, query: String, theme: String) -> Self {
        // The buffers normalise line endings; evaluate what they hold
        let query = TextBuffer::single_line(&query);
        let document = TextBuffer::multi_line(&document);
        let evaluation = EvaluationState::new(document.text(), query.text());
        Self {
            query,
            document,
            loaded_document: evaluation.document().to_string(),
            evaluation,
            focus: Focus::Query,
            filename: None,
            message: None,
            show_help: false,
            help_scroll: 0,
            document_scroll: 0,
            viewport_height: 0,
            current_theme: theme,
            pending_theme: None,
            show_line_numbers: true,
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }

    /// Creates a playground seeded with the example document and query.
    pub fn example(theme: String) -> Self {
        Self::new(
            EXAMPLE_DOCUMENT.to_string(),
            EXAMPLE_QUERY.to_string(),
            theme,
        )
    }

    /// Creates a playground with the `default-dark` theme.
    pub fn new_with_default_theme(document: String, query: String) -> Self {
        Self::new(document, query, "default-dark".to_string())
    }

    pub fn evaluation(&self) -> &EvaluationState {
        &self.evaluation
    }

    /// Returns the render-ready view of the current evaluation.
    pub fn view(&self) -> PlaygroundView<'_> {
        PlaygroundView::from_state(&self.evaluation)
    }

    pub fn query_buffer(&self) -> &TextBuffer {
        &self.query
    }

    pub fn document_buffer(&self) -> &TextBuffer {
        &self.document
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Moves focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    /// Returns true if the document differs from what was loaded.
    pub fn is_dirty(&self) -> bool {
        self.evaluation.document() != self.loaded_document
    }

    fn focused_buffer(&mut self) -> &mut TextBuffer {
        match self.focus {
            Focus::Query => &mut self.query,
            Focus::Document => &mut self.document,
        }
    }

    /// Pushes the focused buffer's text into the evaluation.
    fn sync_focused(&mut self) {
        match self.focus {
            Focus::Query => self.evaluation.set_query(self.query.text()),
            Focus::Document => self.evaluation.set_document(self.document.text()),
        }
    }

    /// Inserts a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_buffer().insert_char(c);
        self.sync_focused();
    }

    /// Inserts pasted text into the focused field.
    pub fn insert_str(&mut self, text: &str) {
        self.focused_buffer().insert_str(text);
        self.sync_focused();
    }

    /// Handles Enter: a newline in the document, a jump to the document from
    /// the query bar.
    pub fn insert_newline(&mut self) {
        match self.focus {
            Focus::Query => self.focus = Focus::Document,
            Focus::Document => {
                self.document.insert_newline();
                self.sync_focused();
            }
        }
    }

    /// Inserts `indent_size` spaces into the document.
    pub fn indent(&mut self) {
        if self.focus != Focus::Document {
            return;
        }
        for _ in 0..self.indent_size {
            self.document.insert_char(' ');
        }
        self.sync_focused();
    }

    pub fn backspace(&mut self) {
        if self.focused_buffer().backspace() {
            self.sync_focused();
        }
    }

    /// Applies [`backspace`](Self::backspace) `count` times.
    pub fn backspace_n(&mut self, count: usize) {
        for _ in 0..count {
            self.backspace();
        }
    }

    pub fn delete(&mut self) {
        if self.focused_buffer().delete() {
            self.sync_focused();
        }
    }

    /// Empties the focused field.
    pub fn clear_focused(&mut self) {
        self.focused_buffer().clear();
        self.sync_focused();
    }

    pub fn move_left(&mut self) {
        self.focused_buffer().move_left();
    }

    pub fn move_right(&mut self) {
        self.focused_buffer().move_right();
    }

    pub fn move_up(&mut self) {
        self.focused_buffer().move_up();
    }

    pub fn move_down(&mut self) {
        self.focused_buffer().move_down();
    }

    pub fn move_home(&mut self) {
        self.focused_buffer().move_home();
    }

    pub fn move_end(&mut self) {
        self.focused_buffer().move_end();
    }

    /// Moves the document cursor up by one screen.
    pub fn page_up(&mut self) {
        let page = self.viewport_height.max(1);
        self.document.move_lines_up(page);
    }

    /// Moves the document cursor down by one screen.
    pub fn page_down(&mut self) {
        let page = self.viewport_height.max(1);
        self.document.move_lines_down(page);
    }

    /// Restores the example document and query.
    pub fn reset_to_example(&mut self) {
        self.evaluation = EvaluationState::example();
        self.query = TextBuffer::single_line(self.evaluation.query());
        self.document = TextBuffer::multi_line(self.evaluation.document());
        self.loaded_document = self.evaluation.document().to_string();
        self.filename = None;
        self.document_scroll = 0;
        self.focus = Focus::Query;
    }

    pub fn document_scroll(&self) -> usize {
        self.document_scroll
    }

    /// Adjusts the document scroll offset so the cursor line is visible.
    pub fn adjust_document_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        // Store viewport height for page up/down
        self.viewport_height = viewport_height;

        let cursor_line = self.document.cursor().line;
        if cursor_line < self.document_scroll {
            self.document_scroll = cursor_line;
        } else if cursor_line >= self.document_scroll + viewport_height {
            self.document_scroll = cursor_line - viewport_height + 1;
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll = 0;
    }

    pub fn help_scroll(&self) -> usize {
        self.help_scroll
    }

    pub fn scroll_help_down(&mut self) {
        self.help_scroll += 1;
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    pub fn current_theme(&self) -> &str {
        &self.current_theme
    }

    /// Advances to the next built-in theme, wrapping at the end of the list.
    pub fn cycle_theme(&mut self) {
        let themes = crate::theme::list_builtin_themes();
        let next = themes
            .iter()
            .position(|t| t == &self.current_theme)
            .map(|idx| (idx + 1) % themes.len())
            .unwrap_or(0);
        self.current_theme = themes[next].clone();
        self.pending_theme = Some(self.current_theme.clone());
        self.set_message(
            format!("Theme: {}", self.current_theme),
            MessageLevel::Info,
        );
    }

    /// Takes the theme change requested since the last frame, if any.
    pub fn take_pending_theme(&mut self) -> Option<String> {
        self.pending_theme.take()
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    pub fn set_indent_size(&mut self, size: usize) {
        self.indent_size = size;
    }
}
