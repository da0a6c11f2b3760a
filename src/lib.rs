#![warn(missing_docs)]

//! # countdown-widget
//!
//! A countdown timer component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The user enters a duration in seconds, commits it, and controls the
//! countdown with start, pause and reset. The component follows the Elm
//! Architecture with `init()`, `update()` and `view()` methods and can be
//! embedded in any bubbletea-rs model or run on its own.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`countdown::Model`] | The countdown timer: state machine, ticks, controls and view |
//! | [`duration_input::Model`] | Numeric entry field holding the uncommitted duration |
//! | [`help::Model`] | Help line generated from key bindings |
//!
//! ## Quick Start
//!
//! ```rust
//! use countdown_widget::prelude::*;
//!
//! let mut timer = countdown_new();
//! timer.set_time("5");
//! assert_eq!(timer.display(), "00:05");
//!
//! let _first_tick = timer.start();
//! assert!(timer.running());
//!
//! timer.reset();
//! assert_eq!(timer.display(), "00:00");
//! ```
//!
//! ## Running Full Screen
//!
//! ```rust,no_run
//! use countdown_widget::Countdown;
//! use bubbletea_rs::Program;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<Countdown>::builder().alt_screen(true).build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod countdown;
pub mod duration_input;
pub mod help;
pub mod key;

use bubbletea_rs::Cmd;

/// Focus management shared by components that accept keyboard input.
///
/// A focused component receives keys and shows its cursor; a blurred one
/// ignores typing. The countdown forwards focus to its duration field.
///
/// ```rust
/// use countdown_widget::prelude::*;
///
/// let mut timer = countdown_new();
/// assert!(!timer.focused());
///
/// timer.focus();
/// assert!(timer.focused());
///
/// timer.blur();
/// assert!(!timer.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes keyboard focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use countdown::{
    default_key_map as countdown_default_key_map, format_clock, new as countdown_new,
    parse_seconds, Controls as CountdownControls, InputError, KeyMap as CountdownKeyMap,
    Model as Countdown, Phase, Styles as CountdownStyles, TickMsg as CountdownTickMsg,
    TimeoutMsg as CountdownTimeoutMsg,
};
pub use duration_input::Model as DurationInput;
pub use help::Model as HelpModel;
pub use key::{matches, matches_binding, Binding, Help as KeyHelp, KeyPress};

/// Commonly used types in one import.
///
/// ```rust
/// use countdown_widget::prelude::*;
///
/// let timer: Countdown = countdown_new();
/// assert_eq!(timer.phase(), Phase::Idle);
/// ```
pub mod prelude {
    pub use crate::countdown::{
        default_key_map as countdown_default_key_map, format_clock, new as countdown_new,
        parse_seconds, Controls as CountdownControls, InputError, KeyMap as CountdownKeyMap,
        Model as Countdown, Phase, Styles as CountdownStyles, TickMsg as CountdownTickMsg,
        TimeoutMsg as CountdownTimeoutMsg,
    };
    pub use crate::duration_input::Model as DurationInput;
    pub use crate::help::{KeyMap as HelpKeyMap, Model as HelpModel};
    pub use crate::key::{matches, matches_binding, Binding, Help as KeyHelp, KeyPress};
    pub use crate::Component;
}
