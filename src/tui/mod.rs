//! # TUI Adapter
//!
//! The ratatui-specific layer. Renders the overlay, translates terminal
//! events into `core::Action` values and carries out the returned `Effect`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Single-threaded and cooperative. Each turn:
//!
//! 1. Redraw if something changed.
//! 2. Wait for input, at most until the refresh timer is due (capped at
//!    500ms so a calendar rollover is noticed promptly).
//! 3. Drain all pending input.
//! 4. Fire the refresh timer if due, or refresh immediately if the local
//!    date moved past the last refresh (e.g. after the machine slept).
//!
//! Speech is the only work that leaves this thread; it runs on the tokio
//! runtime and never reports back.

mod component;
mod components;
mod event;
mod timer;
mod ui;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::DisplaySettings;
use crate::core::schedule::until_next_midnight;
use crate::core::speech::Speaker;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardEvent, CardHitbox};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::timer::RefreshTimer;

/// Longest the loop sleeps without checking the clock.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub display: DisplaySettings,
    pub speech_enabled: bool,
    pub hitbox: CardHitbox,
}

impl TuiState {
    pub fn new(display: DisplaySettings, speech_enabled: bool) -> Self {
        Self {
            display,
            speech_enabled,
            hitbox: CardHitbox::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Show the overlay until the user quits.
pub fn run(app: App, speaker: Speaker, display: DisplaySettings) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, app, &speaker, display));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut app: App,
    speaker: &Speaker,
    display: DisplaySettings,
) -> io::Result<()> {
    let mut tui = TuiState::new(display, speaker.is_enabled());
    let mut timer = RefreshTimer::default();
    let mut needs_redraw = true;

    // A selection made at startup stays until midnight
    if app.selection.is_some() {
        apply_effect(Effect::ScheduleMidnight, &mut timer, speaker, app.retry.delay);
    }

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = timer
            .remaining(Instant::now())
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        // Process first event + drain ALL pending events before next draw
        let mut actions = Vec::new();
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            match event {
                TuiEvent::Quit => actions.push(Action::Quit),
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                other => {
                    if let Some(CardEvent::Pronounce) = tui.hitbox.handle_event(&other) {
                        actions.push(Action::Pronounce);
                    }
                }
            }
            next = poll_event_immediate()?;
        }

        if let Some(refresh) =
            due_refresh(&mut timer, &app, Local::now().date_naive(), Instant::now())
        {
            actions.push(refresh);
        }

        for action in actions {
            debug!("Event loop dispatching: {:?}", action);
            if matches!(action, Action::Refresh { .. }) {
                needs_redraw = true;
            }
            let effect = update(&mut app, action);
            if apply_effect(effect, &mut timer, speaker, app.retry.delay) {
                return Ok(());
            }
        }
    }
}

/// Decide whether a refresh runs this turn. A due timer wins and keeps its
/// retry offset; otherwise a date past the last refresh triggers a fresh pick
/// with offset 0.
fn due_refresh(
    timer: &mut RefreshTimer,
    app: &App,
    today: NaiveDate,
    now: Instant,
) -> Option<Action> {
    if let Some(retry_offset) = timer.take_due(now) {
        return Some(Action::Refresh {
            today,
            retry_offset,
        });
    }
    if app.last_attempted != Some(today) {
        info!("Calendar date is now {}, refreshing", today);
        return Some(Action::Refresh {
            today,
            retry_offset: 0,
        });
    }
    None
}

/// Carry out an effect. Returns true when the loop should exit.
fn apply_effect(effect: Effect, timer: &mut RefreshTimer, speaker: &Speaker, backoff: Duration) -> bool {
    match effect {
        Effect::None => {}
        Effect::ScheduleMidnight => {
            let delay = until_next_midnight(&Local::now());
            info!("Next refresh in {}s", delay.as_secs());
            timer.arm(Instant::now(), delay, 0);
        }
        Effect::ScheduleRetry { retry_offset } => {
            info!("Retrying in {:?} with offset {}", backoff, retry_offset);
            timer.arm(Instant::now(), backoff, retry_offset);
        }
        Effect::Speak(term) => {
            // Detached; the task logs its own outcome
            let _ = speaker.speak(&term);
        }
        Effect::Quit => return true,
    }
    false
}
