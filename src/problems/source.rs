use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching or locating a problem.
/// None of these are fatal — the panel stays interactive and the user
/// retries with "next" or a reload.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The relay returned a non-success response.
    Api { status: u16, message: String },
    /// The relay envelope or upstream text could not be decoded.
    Parse(String),
    /// The requested id is past the last known problem.
    OutOfRange { id: u32, max: u32 },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "relay error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::OutOfRange { id, max } => {
                write!(f, "problem {id} is out of range (last known is {max})")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Where problem text comes from.
///
/// The TUI only talks to this trait; the real implementation goes through
/// the HTTP relay, tests substitute a stub.
#[async_trait]
pub trait ProblemSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetch the bulk listing — one CSV-like record line per problem.
    async fn fetch_listing(&self) -> Result<String, FetchError>;

    /// Fetch a single problem's raw text by id.
    async fn fetch_problem(&self, id: u32) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = FetchError::OutOfRange { id: 931, max: 930 };
        assert_eq!(
            err.to_string(),
            "problem 931 is out of range (last known is 930)"
        );
    }

    #[test]
    fn test_display_api() {
        let err = FetchError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "relay error (HTTP 502): bad gateway");
    }
}
