//! # Application State
//!
//! Core business state for Eulerpad. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ProblemSource>  // where problem text comes from
//! ├── progress: ProgressState        // persisted current problem id
//! ├── catalog: Option<ProblemCatalog> // raw listing lines (batch mode)
//! ├── problem: Option<Problem>       // what the panel shows
//! ├── finished: bool                 // advanced past the last problem
//! ├── status_message: String         // loading/status field
//! ├── is_loading: bool               // fetch in flight
//! └── error: Option<String>          // error message
//! ```
//!
//! State changes only happen through `update(state, action)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::config::{ResolvedConfig, SourceMode};
use crate::core::progress::ProgressState;
use crate::problems::{Problem, ProblemCatalog, ProblemSource};

pub struct App {
    pub source: Arc<dyn ProblemSource>,
    pub mode: SourceMode,
    pub progress: ProgressState,
    pub catalog: Option<ProblemCatalog>,
    pub problem: Option<Problem>,
    /// True once an advance lands past the last known problem.
    pub finished: bool,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Template for the "open in browser" page; `{id}` is substituted.
    pub problem_web_url: String,
}

impl App {
    pub fn new(source: Arc<dyn ProblemSource>, progress: ProgressState, config: &ResolvedConfig) -> Self {
        Self {
            source,
            mode: config.mode,
            progress,
            catalog: None,
            problem: None,
            finished: false,
            status_message: String::new(),
            is_loading: false,
            error: None,
            problem_web_url: config.problem_web_url.clone(),
        }
    }

    pub fn current_id(&self) -> u32 {
        self.progress.current_problem_id
    }

    /// The official web page for the current problem.
    pub fn current_web_url(&self) -> String {
        self.problem_web_url
            .replace("{id}", &self.current_id().to_string())
    }
}
