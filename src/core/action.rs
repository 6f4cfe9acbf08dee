//! # Actions
//!
//! Everything that can happen in Eulerpad becomes an `Action`.
//! User presses `n`? That's `Action::Advance`.
//! The relay answers? That's `Action::ListingLoaded(raw)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole load → fetch → parse → render flow testable
//! without a terminal or a network.

use log::info;

use crate::core::config::SourceMode;
use crate::core::state::App;
use crate::problems::{FetchError, parse};

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// Fetch (or refetch) the current problem's text.
    Reload,
    /// The bulk listing arrived from the relay.
    ListingLoaded(String),
    /// A single problem's raw text arrived from the relay.
    ProblemLoaded { id: u32, raw: String },
    /// The fetch flow failed; the panel shows the error and stays up.
    FetchFailed(FetchError),
    /// Move on to the next problem.
    Advance,
    /// Open the current problem's official page externally.
    OpenProblemPage,
    Quit,
}

/// I/O the caller must perform after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    SaveProgress,
    /// Persist the advanced id, then fetch text for it.
    SaveProgressThenFetch,
    OpenBrowser(String),
    Quit,
}

/// Apply `action` to `app`. Pure state transition; the returned `Effect`
/// tells the event loop what to do next.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Reload => {
            if app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.status_message = String::from("Fetching problems…");
            Effect::SpawnFetch
        }

        Action::ListingLoaded(raw) => {
            let catalog = crate::problems::ProblemCatalog::from_listing(&raw);
            info!("Listing loaded: {} problems", catalog.len());
            app.catalog = Some(catalog);
            app.is_loading = false;
            app.status_message.clear();
            show_current(app);
            Effect::None
        }

        Action::ProblemLoaded { id, raw } => {
            app.is_loading = false;
            app.status_message.clear();
            // A slow response for a problem the user already advanced past
            // is dropped rather than displayed.
            if id == app.current_id() {
                app.problem = Some(parse::parse_free_text(id, &raw));
                app.error = None;
                app.finished = false;
            } else {
                info!("Dropping stale response for problem {}", id);
            }
            Effect::None
        }

        Action::FetchFailed(e) => {
            info!("Fetch failed: {}", e);
            app.is_loading = false;
            app.status_message.clear();
            app.error = Some(e.to_string());
            Effect::None
        }

        Action::Advance => {
            if app.is_loading {
                return Effect::None;
            }
            app.progress = app.progress.advanced();
            match app.mode {
                SourceMode::Batch if app.catalog.is_some() => {
                    show_current(app);
                    Effect::SaveProgress
                }
                // Single mode, or batch before the listing ever loaded
                // (the advance doubles as the retry path).
                _ => {
                    app.is_loading = true;
                    app.error = None;
                    app.status_message = String::from("Fetching problem…");
                    Effect::SaveProgressThenFetch
                }
            }
        }

        Action::OpenProblemPage => Effect::OpenBrowser(app.current_web_url()),

        Action::Quit => Effect::Quit,
    }
}

/// Re-derive the displayed problem from the catalog and the current id.
fn show_current(app: &mut App) {
    let Some(catalog) = &app.catalog else {
        return;
    };
    match catalog.problem(app.current_id()) {
        Ok(problem) => {
            app.problem = Some(problem);
            app.error = None;
            app.finished = false;
        }
        Err(FetchError::OutOfRange { id, max }) => {
            info!("Problem {} past the end of the catalog ({})", id, max);
            app.problem = None;
            app.finished = true;
            app.error = None;
        }
        Err(e) => {
            app.error = Some(e.to_string());
        }
    }
}
