//! Editable text buffer with a cursor.
//!
//! This module provides the [`TextBuffer`] used by both playground inputs.
//! Text is stored as a list of lines and the cursor is a (line, column) pair
//! counted in characters, so multi-byte input never splits a code point.
//!
//! A single-line buffer (the query field) refuses newlines: pressing Enter is
//! a no-op and pasted newlines are dropped.
//!
//! # Example
//!
//! ```
//! use queryquill::playground::buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::multi_line("{}");
//! buffer.move_end();
//! buffer.move_left();
//! buffer.insert_newline();
//! assert_eq!(buffer.text(), "{\n}");
//! assert_eq!(buffer.cursor().line, 1);
//! ```

/// Cursor position inside a [`TextBuffer`], in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character offset within the line.
    pub column: usize,
}

/// Line-oriented editable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: TextCursor,
    multi_line: bool,
}

/// Converts a character offset into a byte offset within `line`.
fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl TextBuffer {
    /// Creates a buffer that accepts newlines, cursor at the start.
    pub fn multi_line(text: &str) -> Self {
        let mut buffer = Self {
            lines: vec![String::new()],
            cursor: TextCursor::default(),
            multi_line: true,
        };
        buffer.set_text(text);
        buffer.cursor = TextCursor::default();
        buffer
    }

    /// Creates a buffer that keeps everything on one line, cursor at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use queryquill::playground::buffer::TextBuffer;
    ///
    /// let mut query = TextBuffer::single_line("name");
    /// query.insert_char('.');
    /// query.insert_newline();
    /// assert_eq!(query.text(), "name.");
    /// ```
    pub fn single_line(text: &str) -> Self {
        let mut buffer = Self {
            lines: vec![String::new()],
            cursor: TextCursor::default(),
            multi_line: false,
        };
        buffer.set_text(text);
        buffer
    }

    /// Replaces the whole content and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = if self.multi_line {
            let normalized = text.replace("\r\n", "\n");
            normalized.split('\n').map(str::to_string).collect()
        } else {
            vec![text.chars().filter(|c| *c != '\n' && *c != '\r').collect()]
        };
        self.move_to_end();
    }

    /// Returns the content with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> TextCursor {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Removes all text.
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor = TextCursor::default();
    }

    fn current_line_len(&self) -> usize {
        char_len(&self.lines[self.cursor.line])
    }

    /// Inserts a character at the cursor. Newlines go through [`insert_newline`].
    ///
    /// [`insert_newline`]: TextBuffer::insert_newline
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        if c == '\r' {
            return;
        }
        let line = &mut self.lines[self.cursor.line];
        let idx = byte_index(line, self.cursor.column);
        line.insert(idx, c);
        self.cursor.column += 1;
    }

    /// Inserts a string at the cursor, e.g. from a paste.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' && !self.multi_line {
                continue;
            }
            self.insert_char(c);
        }
    }

    /// Splits the current line at the cursor. Ignored for single-line buffers.
    pub fn insert_newline(&mut self) {
        if !self.multi_line {
            return;
        }
        let line = &mut self.lines[self.cursor.line];
        let idx = byte_index(line, self.cursor.column);
        let rest = line.split_off(idx);
        self.lines.insert(self.cursor.line + 1, rest);
        self.cursor.line += 1;
        self.cursor.column = 0;
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    ///
    /// Returns true if the text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.column > 0 {
            let line = &mut self.lines[self.cursor.line];
            let idx = byte_index(line, self.cursor.column - 1);
            line.remove(idx);
            self.cursor.column -= 1;
            true
        } else if self.cursor.line > 0 {
            let current = self.lines.remove(self.cursor.line);
            self.cursor.line -= 1;
            self.cursor.column = self.current_line_len();
            self.lines[self.cursor.line].push_str(&current);
            true
        } else {
            false
        }
    }

    /// Deletes the character under the cursor, joining with the next line at
    /// the end of a line.
    ///
    /// Returns true if the text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor.column < self.current_line_len() {
            let line = &mut self.lines[self.cursor.line];
            let idx = byte_index(line, self.cursor.column);
            line.remove(idx);
            true
        } else if self.cursor.line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor.line + 1);
            self.lines[self.cursor.line].push_str(&next);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.current_line_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.column < self.current_line_len() {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.move_lines_up(1);
    }

    pub fn move_down(&mut self) {
        self.move_lines_down(1);
    }

    /// Moves up by `count` lines, clamping the column to the new line.
    pub fn move_lines_up(&mut self, count: usize) {
        self.cursor.line = self.cursor.line.saturating_sub(count);
        self.cursor.column = self.cursor.column.min(self.current_line_len());
    }

    /// Moves down by `count` lines, clamping the column to the new line.
    pub fn move_lines_down(&mut self, count: usize) {
        let last = self.lines.len() - 1;
        self.cursor.line = (self.cursor.line + count).min(last);
        self.cursor.column = self.cursor.column.min(self.current_line_len());
    }

    /// Moves to the start of the current line.
    pub fn move_home(&mut self) {
        self.cursor.column = 0;
    }

    /// Moves to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor.column = self.current_line_len();
    }

    /// Moves to the end of the buffer.
    pub fn move_to_end(&mut self) {
        self.cursor.line = self.lines.len() - 1;
        self.cursor.column = self.current_line_len();
    }
}
