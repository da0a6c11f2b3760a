//! Help line generated from a set of key bindings.
//!
//! The help model renders either a compact single line (`enter set time • s start`)
//! or a multi-column view when [`Model::show_all`] is set. Disabled bindings are
//! skipped, so a component that toggles its bindings with its own state gets a
//! help line that only lists what can be pressed right now.
//!
//! ```rust
//! use countdown_widget::help::{KeyMap, Model};
//! use countdown_widget::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! struct Keys {
//!     quit: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.quit]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.quit]]
//!     }
//! }
//!
//! let keys = Keys { quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit") };
//! let help = Model::new().with_width(40);
//! assert!(!help.view(&keys).is_empty());
//! ```

use crate::key;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Supplies the bindings a help view should display.
pub trait KeyMap {
    /// Bindings for the compact, single-line view.
    fn short_help(&self) -> Vec<&key::Binding>;

    /// Bindings grouped into columns for the expanded view.
    fn full_help(&self) -> Vec<Vec<&key::Binding>>;
}

/// Styles used by the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Truncation marker.
    pub ellipsis: Style,
    /// Key label in the short view.
    pub short_key: Style,
    /// Description in the short view.
    pub short_desc: Style,
    /// Separator between short items.
    pub short_separator: Style,
    /// Key label in the full view.
    pub full_key: Style,
    /// Description in the full view.
    pub full_desc: Style,
    /// Gap between full-view columns.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full multi-column view instead of the short line.
    pub show_all: bool,
    /// Maximum width in cells; 0 means unlimited.
    pub width: usize,
    /// Separator between short-view items.
    pub short_separator: String,
    /// Separator between full-view columns.
    pub full_separator: String,
    /// Marker appended when items are cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short or full view depending on [`Model::show_all`].
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on a single line, truncating with an ellipsis when
    /// the width is exceeded.
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };

            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders each group as a column of `key description` rows.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns = Vec::new();
        let mut total_width = 0;

        for group in &groups {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    format!(
                        "{} {}",
                        self.styles.full_key.clone().inline(true).render(&help.key),
                        self.styles.full_desc.clone().inline(true).render(&help.desc)
                    )
                })
                .collect();
            if rows.is_empty() {
                continue;
            }

            let column = rows.join("\n");
            let col_width = lipgloss::width_visible(&column);

            if let Some(tail) = self.should_add_item(total_width, col_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += col_width;
            columns.push(column);
        }

        if columns.is_empty() {
            return String::new();
        }

        let mut parts = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(col.as_str());
        }

        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width > 0 && total_width + item_width > self.width {
            let tail = format!(
                " {}",
                self.styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&self.ellipsis)
            );
            if total_width + lipgloss::width_visible(&tail) < self.width {
                return Some(tail);
            }
            return Some(String::new());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Binding;
    use crossterm::event::KeyCode;

    struct Keys {
        start: Binding,
        pause: Binding,
        reset: Binding,
    }

    impl Keys {
        fn new() -> Self {
            Self {
                start: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "start"),
                pause: Binding::new(vec![KeyCode::Char('p')]).with_help("p", "pause"),
                reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            }
        }
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.pause, &self.reset]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.start, &self.pause], vec![&self.reset]]
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_short_help_lists_enabled_bindings() {
        let keys = Keys::new();
        let view = plain(&Model::new().view(&keys));
        assert_eq!(view, "s start • p pause • r reset");
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let mut keys = Keys::new();
        keys.start.set_enabled(false);
        let view = plain(&Model::new().view(&keys));
        assert_eq!(view, "p pause • r reset");
    }

    #[test]
    fn test_short_help_truncates() {
        let keys = Keys::new();
        let view = plain(&Model::new().with_width(20).view(&keys));
        assert!(view.starts_with("s start • p pause"));
        assert!(view.ends_with('…'));
        assert!(!view.contains("reset"));
    }

    #[test]
    fn test_full_help_columns() {
        let keys = Keys::new();
        let mut help = Model::new();
        help.show_all = true;
        let view = plain(&help.view(&keys));
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("s start"));
        assert!(lines[0].contains("r reset"));
        assert!(lines[1].starts_with("p pause"));
    }

    #[test]
    fn test_empty_keymap_renders_nothing() {
        assert_eq!(Model::new().short_help_view(vec![]), "");
        assert_eq!(Model::new().full_help_view(vec![]), "");
    }
}
