//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the panel,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Flow
//!
//! The flow is strictly sequential: load persisted id → fetch → parse →
//! render. The fetch itself runs on a tokio task so the terminal stays
//! responsive, but only one is ever in flight (`App::is_loading` gates
//! re-entry) and its result comes back over an `mpsc` channel as a
//! single `Action`.
//!
//! ## Redraw Strategy
//!
//! Conditional redraw: the loop sleeps in `poll_event_timeout` and only
//! draws after an input event, a background action, or a resize.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};

use crate::browser;
use crate::core::action::{Action, Effect, update};
use crate::core::config::{ResolvedConfig, SourceMode};
use crate::core::progress::{ProgressState, ProgressStore};
use crate::core::state::App;
use crate::problems::{ProblemSource, RelayClient};
use crate::tui::component::EventHandler;
use crate::tui::components::ProblemViewState;
use crate::tui::event::TuiEvent;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub problem_view: ProblemViewState,
    /// Id of the problem the body was last drawn for; a change resets
    /// the scroll offset.
    last_problem_id: Option<u32>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            problem_view: ProblemViewState::new(),
            last_problem_id: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel scrolling; the cursor stays hidden
        // since there is no text input.
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig, start_problem: Option<u32>) -> std::io::Result<()> {
    let store = ProgressStore::open_default()?;
    let mut progress = store.load();
    if let Some(id) = start_problem {
        info!("Jumping to problem {} (was {})", id, progress.current_problem_id);
        progress = ProgressState::at(id);
    }

    let source: Arc<dyn ProblemSource> = Arc::new(RelayClient::from_config(&config));
    let mut app = App::new(source, progress, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the background fetch task
    let (tx, rx) = mpsc::channel();

    // Kick off the initial fetch before the first frame.
    let mut should_quit = false;
    let effect = update(&mut app, Action::Reload);
    handle_effect(effect, &mut app, &store, &tx, &mut should_quit);

    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        // A new problem starts back at the top of the body.
        let display_id = app.problem.as_ref().map(|p| p.id);
        if display_id != tui.last_problem_id {
            tui.problem_view.scroll_to_top();
            tui.last_problem_id = display_id;
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = event::poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(event::poll_event_immediate))
        {
            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                // Scroll events go straight to the body view
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToTop => {
                    tui.problem_view.handle_event(&tui_event);
                }

                // Everything else becomes a core action
                TuiEvent::Advance => {
                    let effect = update(&mut app, Action::Advance);
                    handle_effect(effect, &mut app, &store, &tx, &mut should_quit);
                }
                TuiEvent::OpenPage => {
                    let effect = update(&mut app, Action::OpenProblemPage);
                    handle_effect(effect, &mut app, &store, &tx, &mut should_quit);
                }
                TuiEvent::Reload => {
                    let effect = update(&mut app, Action::Reload);
                    handle_effect(effect, &mut app, &store, &tx, &mut should_quit);
                }
                TuiEvent::Quit => {
                    let effect = update(&mut app, Action::Quit);
                    handle_effect(effect, &mut app, &store, &tx, &mut should_quit);
                }
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            handle_effect(effect, &mut app, &store, &tx, &mut should_quit);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Perform the I/O an `update()` asked for.
fn handle_effect(
    effect: Effect,
    app: &mut App,
    store: &ProgressStore,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::None => {}
        Effect::Quit => *should_quit = true,
        Effect::SpawnFetch => spawn_fetch(app, tx.clone()),
        Effect::SaveProgress => save_progress(app, store),
        Effect::SaveProgressThenFetch => {
            save_progress(app, store);
            spawn_fetch(app, tx.clone());
        }
        Effect::OpenBrowser(url) => {
            if let Err(e) = browser::open_url(&url) {
                warn!("Failed to open {}: {}", url, e);
                app.status_message = format!("Could not open browser: {}", e);
            } else {
                app.status_message = format!("Opened {}", url);
            }
        }
    }
}

fn save_progress(app: &App, store: &ProgressStore) {
    if let Err(e) = store.save(&app.progress) {
        warn!("Failed to save progress: {}", e);
    } else {
        debug!("Progress saved: problem {}", app.current_id());
    }
}

/// Fetch the current problem's text on a background task. Exactly one of
/// these runs at a time; `update()` refuses to start another while
/// `is_loading` is set.
fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning fetch (mode: {:?}, problem {})",
        app.mode,
        app.current_id()
    );

    let source = app.source.clone();
    let mode = app.mode;
    let id = app.current_id();

    tokio::spawn(async move {
        let action = match mode {
            SourceMode::Batch => match source.fetch_listing().await {
                Ok(raw) => Action::ListingLoaded(raw),
                Err(e) => Action::FetchFailed(e),
            },
            SourceMode::Single => match source.fetch_problem(id).await {
                Ok(raw) => Action::ProblemLoaded { id, raw },
                Err(e) => Action::FetchFailed(e),
            },
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}
