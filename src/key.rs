//! Key bindings shared by the components in this crate.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the help text shown by the [`help`](crate::help) component. Bindings
//! can be disabled, in which case they neither match input nor appear in help.
//!
//! ```rust
//! use countdown_widget::key::{matches_binding, Binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let start = Binding::new(vec![KeyCode::Char('s')]).with_help("s", "start");
//! let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &start));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Shift is implied by the character for printable keys.
        match self.code {
            KeyCode::Char(_) => {
                self.mods.difference(KeyModifiers::SHIFT)
                    == msg.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.mods == msg.modifiers,
        }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"enter"`.
    pub key: String,
    /// Short description, e.g. `"set time"`.
    pub desc: String,
}

/// A named action bound to one or more key presses.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding can currently fire. A binding with no keys is
    /// never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }
}

/// Reports whether `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| matches_binding(msg, b))
}
