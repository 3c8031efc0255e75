//! Theme system for queryquill.
//!
//! This module provides the theme infrastructure for the terminal playground:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI colors that follow the terminal scheme
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//! - `"nord"`: Arctic, north-bluish color palette
//! - `"dracula"`: Dark theme with vibrant purples and pinks
//! - `"solarized-dark"`: Precision color scheme for machines and people
//!
//! # Examples
//!
//! ```
//! use queryquill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("nord").unwrap();
//! println!("Theme: {}", theme.name);
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the playground.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is unknown.
///
/// # Examples
///
/// ```
/// use queryquill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("default-dark").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        "dracula" => ThemeColors::dracula(),
        "solarized-dark" => ThemeColors::solarized_dark(),
        _ => return None,
    };

    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns the names of all built-in themes, sorted.
///
/// # Examples
///
/// ```
/// use queryquill::theme::list_builtin_themes;
///
/// let themes = list_builtin_themes();
/// assert!(themes.contains(&"default-dark".to_string()));
/// ```
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "dracula".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
        "solarized-dark".to_string(),
    ];
    themes.sort();
    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_loads() {
        for name in list_builtin_themes() {
            let theme = get_builtin_theme(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }
}
