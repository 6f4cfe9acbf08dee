//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::{EulerpadConfig, resolve};
use crate::core::progress::ProgressState;
use crate::core::state::App;
use crate::problems::{FetchError, ProblemSource};

/// A canned source for tests that don't need real network calls.
pub struct StubSource {
    pub listing: String,
    pub problem: String,
}

#[async_trait]
impl ProblemSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_listing(&self) -> Result<String, FetchError> {
        Ok(self.listing.clone())
    }

    async fn fetch_problem(&self, _id: u32) -> Result<String, FetchError> {
        Ok(self.problem.clone())
    }
}

/// Creates a test App with a StubSource and default config.
pub fn test_app() -> App {
    let source = StubSource {
        listing: String::new(),
        problem: String::new(),
    };
    let config = resolve(&EulerpadConfig::default(), None);
    App::new(Arc::new(source), ProgressState::default(), &config)
}
