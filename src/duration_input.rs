//! Numeric entry field for durations.
//!
//! A single-line text input that only accepts the characters of a decimal
//! number (`0-9 . + - e E`). It holds the raw, uncommitted text; turning that
//! text into seconds is the countdown's job, see
//! [`parse_seconds`](crate::countdown::parse_seconds).
//!
//! ```rust
//! use countdown_widget::duration_input;
//!
//! let mut input = duration_input::new().with_placeholder("Enter seconds");
//! input.set_value("90");
//! assert_eq!(input.value(), "90");
//! assert_eq!(input.position(), 2);
//! ```

use crate::key::{matches_binding, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Editing keys for the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Jump to the start.
    pub line_start: Binding,
    /// Jump to the end.
    pub line_end: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::new(vec![plain(KeyCode::Right), ctrl('f')]),
            character_backward: Binding::new(vec![plain(KeyCode::Left), ctrl('b')]),
            delete_character_backward: Binding::new(vec![plain(KeyCode::Backspace), ctrl('h')]),
            delete_character_forward: Binding::new(vec![plain(KeyCode::Delete), ctrl('d')]),
            delete_before_cursor: Binding::new(vec![ctrl('u')]),
            line_start: Binding::new(vec![plain(KeyCode::Home), ctrl('a')]),
            line_end: Binding::new(vec![plain(KeyCode::End), ctrl('e')]),
        }
    }
}

fn plain(code: KeyCode) -> (KeyCode, KeyModifiers) {
    (code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> (KeyCode, KeyModifiers) {
    (KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Whether `c` may appear in a number literal.
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

/// Field state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Shown while the field is empty.
    pub placeholder: String,
    /// Minimum rendered width in cells; the field is padded up to it.
    pub width: usize,
    /// Maximum number of characters; 0 means unlimited.
    pub char_limit: usize,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Style for entered text.
    pub text_style: Style,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the character under the cursor.
    pub cursor_style: Style,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            width: 0,
            char_limit: 20,
            key_map: KeyMap::default(),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            value: Vec::new(),
            pos: 0,
            focus: false,
        }
    }
}

/// Creates an empty, unfocused field.
pub fn new() -> Model {
    Model::default()
}

impl Model {
    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the minimum rendered width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the content. Characters that cannot appear in a number are
    /// dropped and the result is cut to the character limit. The cursor moves
    /// to the end.
    pub fn set_value(&mut self, s: &str) {
        let mut value: Vec<char> = s.chars().filter(|c| is_numeric_char(*c)).collect();
        if self.char_limit > 0 {
            value.truncate(self.char_limit);
        }
        self.value = value;
        self.pos = self.value.len();
    }

    /// Current content.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Clears the content.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the content.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Applies an editing key or inserts a character. Returns whether the
    /// key was consumed; unfocused fields consume nothing.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }

        let km = &self.key_map;
        if matches_binding(msg, &km.delete_character_backward) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
            }
        } else if matches_binding(msg, &km.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(msg, &km.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches_binding(msg, &km.character_backward) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if matches_binding(msg, &km.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(msg, &km.line_start) {
            self.pos = 0;
        } else if matches_binding(msg, &km.line_end) {
            self.pos = self.value.len();
        } else {
            return self.insert(msg);
        }
        true
    }

    fn insert(&mut self, msg: &KeyMsg) -> bool {
        let KeyCode::Char(c) = msg.key else {
            return false;
        };
        if msg
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            || !is_numeric_char(c)
        {
            return false;
        }
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            // Swallow it so the parent does not treat it as a command.
            return true;
        }
        self.value.insert(self.pos, c);
        self.pos += 1;
        true
    }

    /// Renders the field with the cursor shown when focused.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let mut v = String::new();
        let before: String = self.value[..self.pos].iter().collect();
        v.push_str(&self.text_style.render(&before));

        if self.pos < self.value.len() {
            let under = self.value[self.pos].to_string();
            v.push_str(&self.cursor_view(&under));
            let after: String = self.value[self.pos + 1..].iter().collect();
            if !after.is_empty() {
                v.push_str(&self.text_style.render(&after));
            }
        } else {
            v.push_str(&self.cursor_view(" "));
        }

        // Every char is ASCII so the cursor cell is the only extra column.
        let used = self.value.len() + usize::from(self.pos == self.value.len());
        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_default();
        let rest: String = chars.collect();

        let mut v = self.cursor_view(&first);
        v.push_str(&self.placeholder_style.render(&rest));

        let used = UnicodeWidthStr::width(self.placeholder.as_str());
        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }

    fn cursor_view(&self, under: &str) -> String {
        if self.focus {
            self.cursor_style.clone().inline(true).render(under)
        } else if self.value.is_empty() {
            self.placeholder_style.render(under)
        } else {
            self.text_style.render(under)
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn focused() -> Model {
        let mut m = new();
        m.focus();
        m
    }

    fn type_str(m: &mut Model, s: &str) {
        for c in s.chars() {
            m.handle_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_digits() {
        let mut m = focused();
        type_str(&mut m, "120");
        assert_eq!(m.value(), "120");
        assert_eq!(m.position(), 3);
    }

    #[test]
    fn test_rejects_letters() {
        let mut m = focused();
        assert!(!m.handle_key(&key(KeyCode::Char('s'))));
        assert!(!m.handle_key(&key(KeyCode::Char('p'))));
        type_str(&mut m, "1.5e1");
        assert_eq!(m.value(), "1.5e1");
    }

    #[test]
    fn test_ignores_input_when_blurred() {
        let mut m = new();
        assert!(!m.handle_key(&key(KeyCode::Char('1'))));
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_control_chars_not_inserted() {
        let mut m = focused();
        let msg = KeyMsg {
            key: KeyCode::Char('1'),
            modifiers: KeyModifiers::ALT,
        };
        assert!(!m.handle_key(&msg));
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_editing() {
        let mut m = focused();
        type_str(&mut m, "1234");
        m.handle_key(&key(KeyCode::Left));
        m.handle_key(&key(KeyCode::Backspace));
        assert_eq!(m.value(), "124");
        assert_eq!(m.position(), 2);

        m.handle_key(&key(KeyCode::Home));
        m.handle_key(&key(KeyCode::Delete));
        assert_eq!(m.value(), "24");

        m.handle_key(&key(KeyCode::End));
        type_str(&mut m, "0");
        assert_eq!(m.value(), "240");

        m.set_cursor(1);
        m.handle_key(&KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(m.value(), "40");
        assert_eq!(m.position(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut m = focused();
        assert!(m.handle_key(&key(KeyCode::Backspace)));
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_char_limit() {
        let mut m = focused();
        m.char_limit = 3;
        type_str(&mut m, "12345");
        assert_eq!(m.value(), "123");

        m.set_value("987654");
        assert_eq!(m.value(), "987");
    }

    #[test]
    fn test_set_value_filters() {
        let mut m = new();
        m.set_value("1a2 b3");
        assert_eq!(m.value(), "123");
        assert_eq!(m.position(), 3);
        m.reset();
        assert_eq!(m.value(), "");
        assert_eq!(m.position(), 0);
    }

    #[test]
    fn test_view_placeholder_and_value() {
        let mut m = focused().with_placeholder("Enter seconds").with_width(16);
        let view = strip_ansi_escapes::strip_str(m.view());
        assert_eq!(view, "Enter seconds   ");

        m.set_value("45");
        let view = strip_ansi_escapes::strip_str(m.view());
        assert_eq!(view, "45              ");
    }

    #[test]
    fn test_focus_state() {
        let mut m = new();
        assert!(!m.focused());
        assert!(m.focus().is_none());
        assert!(m.focused());
        m.blur();
        assert!(!m.focused());
    }
}
