//! The countdown component: scheduling, messages and key handling.

use super::keymap::KeyMap;
use super::state::{InputError, Phase, TickOutcome, TimerState};
use super::view::Styles;
use crate::key::matches_binding;
use crate::{duration_input, help, Component};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Time between ticks unless overridden with [`Model::with_interval`].
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// One elapsed interval for the countdown with the matching id.
///
/// Each tick carries the tag that was current when it was scheduled. Starting,
/// pausing, resetting or setting a new time moves the tag on, so a tick that
/// was already in flight is dropped when it arrives.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the countdown that scheduled this tick.
    pub id: i64,
    pub(crate) tag: u64,
}

/// Sent once when a running countdown reaches zero.
#[derive(Debug, Clone)]
pub struct TimeoutMsg {
    /// Id of the countdown that finished.
    pub id: i64,
}

/// Countdown timer component.
///
/// Owns the countdown state and the duration field, and turns key presses
/// and tick messages into transitions. Only one tick is ever outstanding: each
/// accepted tick schedules the next one if the countdown is still running.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks; each tick removes one second.
    pub interval: Duration,
    /// Key bindings. Start and pause are enabled or disabled to match the
    /// current phase.
    pub key_map: KeyMap,
    /// Styles for the rendered view.
    pub styles: Styles,
    /// Help line under the controls.
    pub help: help::Model,
    /// The duration field.
    pub input: duration_input::Model,

    pub(crate) state: TimerState,
    pub(crate) id: i64,
    pub(crate) tag: u64,
}

/// Creates an idle countdown with a one second interval.
pub fn new() -> Model {
    Model::new()
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an idle countdown with a one second interval.
    pub fn new() -> Self {
        let mut m = Self {
            interval: DEFAULT_INTERVAL,
            key_map: KeyMap::default(),
            styles: Styles::default(),
            help: help::Model::new(),
            input: duration_input::new()
                .with_placeholder("Enter seconds")
                .with_width(16),
            state: TimerState::new(),
            id: next_id(),
            tag: 0,
        };
        m.sync_bindings();
        m
    }

    /// Sets the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self.sync_bindings();
        self
    }

    /// Sets the placeholder of the duration field.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = placeholder.into();
        self
    }

    /// Unique id of this countdown, carried by its messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Seconds left.
    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds()
    }

    /// Duration of the last committed entry.
    pub fn initial_seconds(&self) -> u64 {
        self.state.initial_seconds()
    }

    /// True while a run is active, paused or not.
    pub fn running(&self) -> bool {
        self.state.running()
    }

    /// True while a run is suspended.
    pub fn paused(&self) -> bool {
        self.state.paused()
    }

    /// True when the "time's up" message is showing.
    pub fn timed_out(&self) -> bool {
        self.state.timed_out()
    }

    /// Text currently typed in the duration field.
    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// Commits `text` as the new duration.
    ///
    /// Text that does not parse to at least one second is ignored: nothing
    /// changes and nothing is shown to the user.
    pub fn set_time(&mut self, text: &str) -> Option<Cmd> {
        match self.state.set_time(text) {
            Ok(seconds) => {
                self.tag += 1;
                self.sync_bindings();
                debug!(id = self.id, seconds, "countdown armed");
            }
            Err(err) => self.rejected(&err),
        }
        None
    }

    /// Commits whatever is typed in the duration field.
    pub fn set_time_from_input(&mut self) -> Option<Cmd> {
        let text = self.input.value();
        self.set_time(&text)
    }

    /// Starts or resumes counting and returns the command for the first tick.
    ///
    /// Does nothing when no time remains. Clears the duration field. Calling
    /// it while already running returns no command, so a second tick chain is
    /// never started.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.state.remaining_seconds() == 0 {
            return None;
        }
        self.input.reset();
        if !self.state.start() {
            return None;
        }
        self.sync_bindings();
        debug!(id = self.id, remaining = self.remaining_seconds(), "countdown started");
        Some(self.tick())
    }

    /// Suspends a running countdown; the pending tick is dropped on arrival.
    pub fn pause(&mut self) -> Option<Cmd> {
        if self.state.pause() {
            self.tag += 1;
            self.sync_bindings();
            debug!(id = self.id, remaining = self.remaining_seconds(), "countdown paused");
        }
        None
    }

    /// Stops the countdown, clears the remaining time and the duration field.
    pub fn reset(&mut self) -> Option<Cmd> {
        self.state.reset();
        self.input.reset();
        self.tag += 1;
        self.sync_bindings();
        debug!(id = self.id, "countdown reset");
        None
    }

    /// The command to run when the component is mounted. The countdown waits
    /// for a start, so nothing is scheduled; the field takes focus.
    pub fn init(&mut self) -> Option<Cmd> {
        self.focus()
    }

    /// Handles tick and key messages addressed to this countdown.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            return self.handle_tick(tick_msg);
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    fn handle_tick(&mut self, msg: &TickMsg) -> Option<Cmd> {
        if msg.id != self.id || msg.tag != self.tag {
            trace!(id = self.id, tag = msg.tag, expected = self.tag, "stale tick dropped");
            return None;
        }

        match self.state.tick() {
            TickOutcome::Ignored => None,
            TickOutcome::Continue => {
                trace!(id = self.id, remaining = self.remaining_seconds(), "tick");
                Some(self.tick())
            }
            TickOutcome::Finished => {
                self.sync_bindings();
                debug!(id = self.id, "countdown finished");
                let id = self.id;
                Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
                    Box::new(TimeoutMsg { id }) as Msg
                }))
            }
        }
    }

    /// Dispatches a key press to a control or to the duration field.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(msg, &self.key_map.set_time) {
            return self.set_time_from_input();
        }
        if matches_binding(msg, &self.key_map.start) {
            return self.start();
        }
        if matches_binding(msg, &self.key_map.pause) {
            return self.pause();
        }
        if matches_binding(msg, &self.key_map.reset) {
            return self.reset();
        }
        if matches_binding(msg, &self.key_map.help) {
            self.help.show_all = !self.help.show_all;
            return None;
        }
        self.input.handle_key(msg);
        None
    }

    fn tick(&mut self) -> Cmd {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn rejected(&self, err: &InputError) {
        debug!(id = self.id, error = %err, "duration entry ignored");
    }

    fn sync_bindings(&mut self) {
        let controls = self.controls();
        self.key_map.set_time.set_enabled(controls.set_time);
        self.key_map.start.set_enabled(controls.start);
        self.key_map.pause.set_enabled(controls.pause);
        self.key_map.reset.set_enabled(controls.reset);
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.input.focus()
    }

    fn blur(&mut self) {
        self.input.blur();
    }

    fn focused(&self) -> bool {
        self.input.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new();
        let cmd = model.init();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
