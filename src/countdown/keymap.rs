//! Key bindings for the countdown controls.

use crate::help;
use crate::key::Binding;
use crossterm::event::KeyCode;

/// One binding per control, plus the help toggle.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Commit the typed duration.
    pub set_time: Binding,
    /// Start or resume.
    pub start: Binding,
    /// Pause a running countdown.
    pub pause: Binding,
    /// Clear the countdown.
    pub reset: Binding,
    /// Toggle the full help view.
    pub help: Binding,
}

/// Default bindings: `enter`, `s`, `p`, `r` and `?`.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        set_time: Binding::new(vec![KeyCode::Enter]).with_help("enter", "set time"),
        start: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "start"),
        pause: Binding::new(vec![KeyCode::Char('p')]).with_help("p", "pause"),
        reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
        help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl help::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.set_time,
            &self.start,
            &self.pause,
            &self.reset,
            &self.help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.set_time, &self.start, &self.pause],
            vec![&self.reset, &self.help],
        ]
    }
}
