use serde::{Deserialize, Serialize};

use super::parse;
use super::source::FetchError;

/// One problem, ready for display. Built fresh on every fetch or advance;
/// nothing caches these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// The raw lines of the bulk listing, in problem order.
///
/// Line N-1 holds problem N. `len()` is the highest known problem id.
/// Problems are parsed out of it on demand, never stored parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemCatalog {
    lines: Vec<String>,
}

impl ProblemCatalog {
    /// Build a catalog from the raw listing text, dropping empty lines.
    pub fn from_listing(raw: &str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();
        ProblemCatalog { lines }
    }

    pub fn len(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parse the problem with the given id out of the listing.
    ///
    /// Ids outside `1..=len()` yield `FetchError::OutOfRange` — the line is
    /// never touched, malformed or not.
    pub fn problem(&self, id: u32) -> Result<Problem, FetchError> {
        if id == 0 || id > self.len() {
            return Err(FetchError::OutOfRange {
                id,
                max: self.len(),
            });
        }
        Ok(parse::parse_record(id, &self.lines[(id - 1) as usize]))
    }
}
