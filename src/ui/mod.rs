//! UI module for the queryquill terminal playground.
//!
//! The screen mirrors the web playground: a single-line path editor on top,
//! the JSON document and the result side by side below it, then a status line
//! and a message line.

pub mod cursor_line;
pub mod document_pane;
pub mod help_overlay;
pub mod message_area;
pub mod query_bar;
pub mod result_pane;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::playground::state::PlaygroundState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// # Example
///
/// ```no_run
/// use queryquill::ui::UI;
/// use queryquill::theme::get_builtin_theme;
/// use queryquill::playground::state::PlaygroundState;
/// use ratatui::backend::TermionBackend;
/// use ratatui::Terminal;
/// use std::io;
/// use termion::raw::IntoRawMode;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// let mut state = PlaygroundState::example("default-dark".to_string());
/// let backend = TermionBackend::new(io::stdout().into_raw_mode().unwrap());
/// let mut terminal = Terminal::new(backend).unwrap();
/// ui.render(&mut terminal, &mut state).unwrap();
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the playground to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut PlaygroundState,
    ) -> Result<()> {
        let colors = &self.theme.colors;

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Query bar
                    Constraint::Min(3),    // Document and result
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[1]);

            query_bar::render_query_bar(f, chunks[0], state, colors);
            document_pane::render_document_pane(f, panes[0], state, colors);
            result_pane::render_result_pane(f, panes[1], state, colors);
            status_line::render_status_line(f, chunks[2], state, colors);
            message_area::render_message_area(f, chunks[3], state, colors);

            if state.show_help() {
                help_overlay::render_help_overlay(f, colors, state.help_scroll());
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_set_theme() {
        let mut ui = UI::new(get_builtin_theme("default-dark").unwrap());
        assert!(ui.set_theme("nord"));
        assert_eq!(ui.theme_name(), "nord");
        assert!(!ui.set_theme("no-such-theme"));
        assert_eq!(ui.theme_name(), "nord");
    }

    #[test]
    fn test_render_example_playground() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut state = PlaygroundState::example("default-dark".to_string());

        ui.render(&mut terminal, &mut state).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("GJSON Path"));
        assert!(text.contains("JSON Input"));
        assert!(text.contains("Result"));
        assert!(text.contains("Anderson"));
        assert!(text.contains("FOUND"));
    }

    #[test]
    fn test_render_help_overlay() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut state = PlaygroundState::example("default-dark".to_string());
        state.toggle_help();

        ui.render(&mut terminal, &mut state).unwrap();

        assert!(screen(&terminal).contains("QueryQuill Help"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut state = PlaygroundState::example("default-dark".to_string());

        assert!(ui.render(&mut terminal, &mut state).is_ok());
    }
}
