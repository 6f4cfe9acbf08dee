//! # Core Application Logic
//!
//! This module contains Eulerpad's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Config / Progress    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                      ┌────────────────┐
//!                      │  TUI Adapter   │
//!                      │   (ratatui)    │
//!                      └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: Settings with defaults → file → env → CLI layering
//! - [`progress`]: The persisted current-problem id

pub mod action;
pub mod config;
pub mod progress;
pub mod state;
