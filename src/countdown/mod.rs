//! Countdown timer component.
//!
//! The user types a duration in seconds, commits it with *Set Time*, and then
//! drives the countdown with *Start*, *Pause* and *Reset*. The remaining time
//! is shown as `mm:ss`, and "Time's up!" appears once a committed duration has
//! run out.
//!
//! Time advances through a single self-rescheduling [`TickMsg`]: every
//! accepted tick schedules the next one only if the countdown is still
//! running, so pausing, resetting and finishing all stop the chain without
//! separate cancellation.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widget::countdown;
//!
//! let mut timer = countdown::new();
//! timer.set_time("90");
//! assert_eq!(timer.display(), "01:30");
//!
//! // Returns the command that delivers the first tick.
//! let first_tick = timer.start();
//! assert!(first_tick.is_some());
//! assert!(timer.running());
//! ```
//!
//! # Invalid Input
//!
//! Entries that are not a number of at least one second are ignored:
//!
//! ```rust
//! use countdown_widget::countdown;
//!
//! let mut timer = countdown::new();
//! timer.set_time("soon");
//! timer.set_time("-5");
//! assert_eq!(timer.remaining_seconds(), 0);
//! assert_eq!(timer.initial_seconds(), 0);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_widget::countdown::{self, TimeoutMsg};
//!
//! struct App {
//!     timer: countdown::Model,
//!     finished: usize,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = countdown::new();
//!         let cmd = timer.init();
//!         (Self { timer, finished: 0 }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<TimeoutMsg>() {
//!             if done.id == self.timer.id() {
//!                 self.finished += 1;
//!             }
//!             return None;
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```

pub mod keymap;
pub mod model;
pub mod state;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model, TickMsg, TimeoutMsg, DEFAULT_INTERVAL};
pub use state::{format_clock, parse_seconds, InputError, Phase, TickOutcome, TimerState};
pub use view::{Controls, Styles, TIMES_UP};
