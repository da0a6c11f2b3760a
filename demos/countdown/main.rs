//! Runs the countdown widget full screen.
//!
//! ```text
//! countdown --seconds 90 --log-file countdown.log
//! ```
//!
//! Type a number of seconds, press enter to set it, then `s` to start, `p` to
//! pause and `r` to reset. `q` quits.

use anyhow::Context;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use clap::Parser;
use countdown_widget::countdown::{self, TimeoutMsg};
use countdown_widget::key::{matches_binding, Binding};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Command line options.
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "A countdown timer for the terminal")]
struct Config {
    /// Pre-fill the duration field with this many seconds
    #[arg(short, long)]
    seconds: Option<u64>,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Config {
    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

struct App {
    timer: countdown::Model,
    quit: Binding,
    finished: u32,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = CONFIG.get_or_init(Config::parse);

        let mut timer = countdown::new().with_interval(config.interval());
        if let Some(seconds) = config.seconds {
            timer.input.set_value(&seconds.to_string());
        }
        let cmd = timer.init();

        let quit = Binding::new(vec![
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ])
        .with_help("q", "quit");

        (
            Self {
                timer,
                quit,
                finished: 0,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key, &self.quit) {
                return Some(quit());
            }
        }

        if let Some(done) = msg.downcast_ref::<TimeoutMsg>() {
            if done.id == self.timer.id() {
                self.finished += 1;
                info!(
                    seconds = self.timer.initial_seconds(),
                    finished = self.finished,
                    "countdown ran out"
                );
            }
            return None;
        }

        self.timer.update(msg)
    }

    fn view(&self) -> String {
        let footer = Style::new().faint(true).render("q quit");
        format!("\n{}\n\n{}\n", self.timer.view(), footer)
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs only go to a file.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("countdown_widget=debug,countdown=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CONFIG.get_or_init(Config::parse);
    init_tracing(config)?;
    info!(
        interval_ms = config.interval_ms,
        seconds = ?config.seconds,
        "starting countdown"
    );

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    info!("countdown closed");
    Ok(())
}
