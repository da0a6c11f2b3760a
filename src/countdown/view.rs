//! Rendering for the countdown component.

use super::model::Model;
use super::state::format_clock;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Text shown once the countdown has run out.
pub const TIMES_UP: &str = "Time's up!";

/// Which controls can be used right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// The duration field.
    pub input: bool,
    /// Set Time.
    pub set_time: bool,
    /// Start. Disabled only while counting.
    pub start: bool,
    /// Pause. Enabled only while counting.
    pub pause: bool,
    /// Reset.
    pub reset: bool,
    /// Whether the "time's up" message is visible.
    pub times_up: bool,
}

/// Styles for each part of the view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading.
    pub title: Style,
    /// The `mm:ss` clock.
    pub clock: Style,
    /// An enabled button.
    pub button: Style,
    /// A disabled button.
    pub disabled_button: Style,
    /// The "time's up" line.
    pub times_up: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let button = Style::new()
            .foreground(Color::from("#000000"))
            .background(Color::from("#4ADE80"))
            .padding(0, 1, 0, 1);

        Self {
            title: Style::new()
                .bold(true)
                .foreground(lipgloss::AdaptiveColor {
                    Light: "#1F2937",
                    Dark: "#E5E7EB",
                })
                .padding(0, 0, 1, 0),
            clock: Style::new()
                .bold(true)
                .border_style(lipgloss::normal_border())
                .border_top(true)
                .border_bottom(true)
                .border_left(true)
                .border_right(true)
                .padding(0, 3, 0, 3),
            disabled_button: button.clone().faint(true),
            button,
            times_up: Style::new().bold(true).foreground(Color::from("#EF4444")),
        }
    }
}

impl Model {
    /// Enablement of every control for the current state.
    pub fn controls(&self) -> Controls {
        let counting = self.running() && !self.paused();
        Controls {
            input: true,
            set_time: true,
            start: !counting,
            pause: counting,
            reset: true,
            times_up: self.timed_out(),
        }
    }

    /// Remaining time as `mm:ss`.
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds())
    }

    fn button(&self, label: &str, enabled: bool) -> String {
        let style = if enabled {
            &self.styles.button
        } else {
            &self.styles.disabled_button
        };
        style.render(label)
    }

    /// Renders the whole widget.
    pub fn view(&self) -> String {
        let controls = self.controls();

        let title = self.styles.title.render("Countdown Timer");
        let entry = format!(
            "{}  {}",
            self.input.view(),
            self.button("Set Time", controls.set_time)
        );
        let clock = self.styles.clock.render(&self.display());
        let buttons = [
            self.button("Start", controls.start),
            self.button("Pause", controls.pause),
            self.button("Reset", controls.reset),
        ]
        .join("  ");

        let mut rows = vec![title, entry, String::new(), clock, String::new(), buttons];
        if controls.times_up {
            rows.push(String::new());
            rows.push(self.styles.times_up.render(TIMES_UP));
        }
        rows.push(String::new());
        rows.push(self.help.view(&self.key_map));

        let parts: Vec<&str> = rows.iter().map(String::as_str).collect();
        lipgloss::join_vertical(lipgloss::CENTER, &parts)
    }
}
