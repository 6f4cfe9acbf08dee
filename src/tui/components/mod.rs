//! # TUI Components
//!
//! Components follow two patterns, both rendering through the
//! [`Component`](super::component::Component) trait:
//!
//! - **Stateless, props-based**: `TitleBar` and `StatusBar` receive all
//!   data as struct fields and just draw it.
//! - **Stateful**: `ProblemView` keeps a scroll offset across frames in
//!   `ProblemViewState` and consumes scroll events through
//!   [`EventHandler`](super::component::EventHandler).
//!
//! Each component file contains its state types, rendering logic, and
//! tests, so one file tells the whole story of one region of the panel.

pub mod problem_view;
pub mod status_bar;
pub mod title_bar;

pub use problem_view::{ProblemView, ProblemViewState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
