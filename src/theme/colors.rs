//! Color definitions for queryquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used by the playground. Colors fall into three groups: value colors
//! for the result pane, chrome colors for panes and bars, and semantic colors
//! for messages and markers.

use ratatui::style::Color;

/// Defines all colors used in a queryquill theme.
///
/// # Examples
///
/// ```
/// use queryquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Value colors
    /// Color for headings and key names in help text.
    pub key: Color,
    /// Color for string results.
    pub string: Color,
    /// Color for number results and key bindings in help text.
    pub number: Color,
    /// Color for boolean results.
    pub boolean: Color,
    /// Color for null results.
    pub null: Color,

    // Chrome colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Color for the text cursor block.
    pub cursor: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Border color for unfocused panes.
    pub border: Color,
    /// Border color for the focused pane.
    pub focused_border: Color,
    /// Color for placeholder text and line numbers.
    pub placeholder: Color,

    // Semantic colors
    /// Color for errors, the invalid marker, and "Value not found".
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the palette follows the terminal's own scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use queryquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            key: Color::LightBlue,
            string: Color::Green,
            number: Color::Magenta,
            boolean: Color::Yellow,
            null: Color::DarkGray,

            background: Color::Reset, // terminal default
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            border: Color::DarkGray,
            focused_border: Color::LightBlue,
            placeholder: Color::DarkGray,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use queryquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            key: Color::Rgb(166, 38, 164),
            string: Color::Rgb(80, 161, 79),
            number: Color::Rgb(152, 104, 1),
            boolean: Color::Rgb(1, 132, 188),
            null: Color::Rgb(160, 161, 167),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            border: Color::Rgb(200, 200, 200),
            focused_border: Color::Rgb(82, 139, 255),
            placeholder: Color::Rgb(160, 161, 167),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            key: Color::Rgb(251, 184, 108),    // orange
            string: Color::Rgb(184, 187, 38),  // green
            number: Color::Rgb(211, 134, 155), // purple
            boolean: Color::Rgb(254, 128, 25), // bright orange
            null: Color::Rgb(146, 131, 116),   // gray

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(251, 184, 108),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),
            border: Color::Rgb(102, 92, 84),
            focused_border: Color::Rgb(250, 189, 47),
            placeholder: Color::Rgb(146, 131, 116),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            key: Color::Rgb(136, 192, 208),     // frost cyan
            string: Color::Rgb(163, 190, 140),  // aurora green
            number: Color::Rgb(180, 142, 173),  // aurora purple
            boolean: Color::Rgb(235, 203, 139), // aurora yellow
            null: Color::Rgb(76, 86, 106),      // polar night gray

            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            cursor: Color::Rgb(136, 192, 208),
            status_line_bg: Color::Rgb(59, 66, 82),
            status_line_fg: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            focused_border: Color::Rgb(136, 192, 208),
            placeholder: Color::Rgb(97, 110, 136),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            key: Color::Rgb(139, 233, 253),     // cyan
            string: Color::Rgb(241, 250, 140),  // yellow
            number: Color::Rgb(189, 147, 249),  // purple
            boolean: Color::Rgb(255, 121, 198), // pink
            null: Color::Rgb(98, 114, 164),     // comment

            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            cursor: Color::Rgb(189, 147, 249),
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(68, 71, 90),
            focused_border: Color::Rgb(189, 147, 249),
            placeholder: Color::Rgb(98, 114, 164),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108),
            info: Color::Rgb(139, 233, 253),
        }
    }

    /// Returns the Solarized Dark color scheme.
    pub fn solarized_dark() -> Self {
        Self {
            key: Color::Rgb(38, 139, 210),    // blue
            string: Color::Rgb(133, 153, 0),  // green
            number: Color::Rgb(211, 54, 130), // magenta
            boolean: Color::Rgb(181, 137, 0), // yellow
            null: Color::Rgb(88, 110, 117),   // base01

            background: Color::Rgb(0, 43, 54),
            foreground: Color::Rgb(131, 148, 150),
            cursor: Color::Rgb(38, 139, 210),
            status_line_bg: Color::Rgb(7, 54, 66),
            status_line_fg: Color::Rgb(147, 161, 161),
            border: Color::Rgb(7, 54, 66),
            focused_border: Color::Rgb(42, 161, 152),
            placeholder: Color::Rgb(88, 110, 117),

            error: Color::Rgb(220, 50, 47),
            warning: Color::Rgb(203, 75, 22),
            info: Color::Rgb(42, 161, 152),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_border_differs_from_border() {
        for colors in [
            ThemeColors::default_dark(),
            ThemeColors::default_light(),
            ThemeColors::gruvbox_dark(),
            ThemeColors::nord(),
            ThemeColors::dracula(),
            ThemeColors::solarized_dark(),
        ] {
            assert_ne!(colors.border, colors.focused_border);
        }
    }
}
