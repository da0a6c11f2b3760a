//! Countdown state machine.
//!
//! [`TimerState`] holds the remaining time, the committed duration and the
//! current [`Phase`]. It knows nothing about scheduling: the component in
//! [`model`](super::model) feeds it ticks and decides when the next one fires.

use thiserror::Error;

/// Where the countdown is in its lifecycle.
///
/// "Finished" is not a phase of its own: it is [`Phase::Idle`] with a
/// previously committed duration, see [`TimerState::timed_out`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing left to count.
    #[default]
    Idle,
    /// A duration is loaded but counting has not begun.
    Armed,
    /// Counting down.
    Running,
    /// Counting suspended; resumable with start.
    Paused,
}

/// Why a duration entry was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The text was blank.
    #[error("no duration entered")]
    Empty,
    /// The text is not a number.
    #[error("{0:?} is not a number")]
    NotANumber(String),
    /// The number is NaN or infinite.
    #[error("duration must be finite")]
    NotFinite,
    /// The number is below one whole second.
    #[error("duration must be at least one second")]
    NotPositive,
}

/// Result of feeding a tick to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running; nothing changed.
    Ignored,
    /// One second elapsed and time remains.
    Continue,
    /// The last second elapsed; the countdown stopped.
    Finished,
}

/// Parses duration text as whole seconds.
///
/// Leading and trailing whitespace is ignored. Any finite number is accepted
/// and fractional parts are dropped, so `"5.9"` yields 5. Anything that does
/// not come out to at least one second is rejected.
pub fn parse_seconds(text: &str) -> Result<u64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotFinite);
    }

    let whole = value.floor();
    if whole < 1.0 {
        return Err(InputError::NotPositive);
    }
    // Saturates for values beyond u64::MAX.
    Ok(whole as u64)
}

/// Formats seconds as zero-padded `mm:ss`. Minutes are not wrapped into
/// hours, so an hour renders as `60:00`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The countdown's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    phase: Phase,
    remaining: u64,
    initial: u64,
}

impl TimerState {
    /// Creates an idle countdown with nothing committed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining
    }

    /// Duration of the last successful [`set_time`](Self::set_time).
    pub fn initial_seconds(&self) -> u64 {
        self.initial
    }

    /// True while a run is active, paused or not.
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    /// True while a run is suspended.
    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// True when nothing remains, no run is active and a duration was
    /// committed at some point.
    ///
    /// [`reset`](Self::reset) leaves the committed duration in place, so this
    /// stays true after resetting a countdown that had been set.
    pub fn timed_out(&self) -> bool {
        self.remaining == 0 && !self.running() && self.initial > 0
    }

    /// Commits a new duration from text and arms the countdown.
    ///
    /// On error nothing changes. Valid from any phase; an active run is
    /// abandoned.
    pub fn set_time(&mut self, text: &str) -> Result<u64, InputError> {
        let seconds = parse_seconds(text)?;
        self.remaining = seconds;
        self.initial = seconds;
        self.phase = Phase::Armed;
        Ok(seconds)
    }

    /// Begins or resumes counting. Returns whether the phase changed to
    /// [`Phase::Running`]; it does not when nothing remains or when already
    /// running.
    pub fn start(&mut self) -> bool {
        if self.remaining == 0 || self.phase == Phase::Running {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Suspends a running countdown. Returns whether anything changed.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Clears the remaining time and stops any run. The committed duration
    /// is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining = 0;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running || self.remaining == 0 {
            return TickOutcome::Ignored;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.phase = Phase::Idle;
            return TickOutcome::Finished;
        }
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_parse_seconds_accepts_numbers() {
        assert_eq!(parse_seconds("5"), Ok(5));
        assert_eq!(parse_seconds("  42 "), Ok(42));
        assert_eq!(parse_seconds("+7"), Ok(7));
        assert_eq!(parse_seconds("1e2"), Ok(100));
        assert_eq!(parse_seconds("5.9"), Ok(5));
        assert_eq!(parse_seconds("1.0"), Ok(1));
    }

    #[test]
    fn test_parse_seconds_rejects() {
        assert_eq!(parse_seconds(""), Err(InputError::Empty));
        assert_eq!(parse_seconds("   "), Err(InputError::Empty));
        assert_eq!(
            parse_seconds("abc"),
            Err(InputError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_seconds("12s"), Err(InputError::NotANumber("12s".to_string())));
        assert_eq!(parse_seconds("inf"), Err(InputError::NotFinite));
        assert_eq!(parse_seconds("NaN"), Err(InputError::NotFinite));
        assert_eq!(parse_seconds("0"), Err(InputError::NotPositive));
        assert_eq!(parse_seconds("-5"), Err(InputError::NotPositive));
        assert_eq!(parse_seconds("0.5"), Err(InputError::NotPositive));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::Empty.to_string(), "no duration entered");
        assert_eq!(
            InputError::NotANumber("x".into()).to_string(),
            "\"x\" is not a number"
        );
    }

    #[test]
    fn test_new_is_idle() {
        let c = TimerState::new();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.remaining_seconds(), 0);
        assert_eq!(c.initial_seconds(), 0);
        assert!(!c.running());
        assert!(!c.paused());
        assert!(!c.timed_out());
    }

    #[test]
    fn test_set_time_arms() {
        let mut c = TimerState::new();
        assert_eq!(c.set_time("90"), Ok(90));
        assert_eq!(c.phase(), Phase::Armed);
        assert_eq!(c.remaining_seconds(), 90);
        assert_eq!(c.initial_seconds(), 90);
        assert!(!c.running());
    }

    #[test]
    fn test_set_time_invalid_leaves_state() {
        let mut c = TimerState::new();
        c.set_time("10").unwrap();
        c.start();
        c.tick();
        let before = c.clone();

        for text in ["", "abc", "0", "-5", "NaN", "0.2"] {
            assert!(c.set_time(text).is_err(), "{text:?} should be rejected");
            assert_eq!(c, before);
        }
    }

    #[test]
    fn test_set_time_while_running_rearms() {
        let mut c = TimerState::new();
        c.set_time("10").unwrap();
        c.start();
        c.tick();
        c.set_time("3").unwrap();
        assert_eq!(c.phase(), Phase::Armed);
        assert_eq!(c.remaining_seconds(), 3);
    }

    #[test]
    fn test_start_requires_time() {
        let mut c = TimerState::new();
        assert!(!c.start());
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_is_idempotent_when_running() {
        let mut c = TimerState::new();
        c.set_time("3").unwrap();
        assert!(c.start());
        assert!(!c.start());
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_pause_without_run_does_nothing() {
        let mut c = TimerState::new();
        assert!(!c.pause());
        c.set_time("3").unwrap();
        assert!(!c.pause());
        assert_eq!(c.phase(), Phase::Armed);

        // A later start is unaffected.
        assert!(c.start());
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut c = TimerState::new();
        c.set_time("5").unwrap();
        c.start();
        c.tick();
        assert!(c.pause());
        assert!(c.running());
        assert!(c.paused());
        assert!(!c.pause());

        for _ in 0..10 {
            assert_eq!(c.tick(), TickOutcome::Ignored);
        }
        assert_eq!(c.remaining_seconds(), 4);

        assert!(c.start());
        assert_eq!(c.tick(), TickOutcome::Continue);
        assert_eq!(c.remaining_seconds(), 3);
    }

    #[test]
    fn test_ticks_run_to_completion() {
        let mut c = TimerState::new();
        c.set_time("3").unwrap();
        c.start();
        assert_eq!(c.tick(), TickOutcome::Continue);
        assert_eq!(c.tick(), TickOutcome::Continue);
        assert_eq!(c.tick(), TickOutcome::Finished);
        assert_eq!(c.remaining_seconds(), 0);
        assert!(!c.running());
        assert!(c.timed_out());
        assert_eq!(c.tick(), TickOutcome::Ignored);
        assert_eq!(c.remaining_seconds(), 0);
    }

    #[test]
    fn test_reset_keeps_initial() {
        let mut c = TimerState::new();
        c.set_time("8").unwrap();
        c.start();
        c.pause();
        c.reset();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.remaining_seconds(), 0);
        assert!(!c.running());
        assert!(!c.paused());
        assert_eq!(c.initial_seconds(), 8);
        assert!(c.timed_out());
    }

    #[test]
    fn test_reset_from_idle() {
        let mut c = TimerState::new();
        c.reset();
        assert_eq!(c, TimerState::new());
    }
}
