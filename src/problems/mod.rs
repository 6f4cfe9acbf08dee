pub mod parse;
pub mod relay;
pub mod source;
pub mod types;

pub use relay::RelayClient;
pub use source::{FetchError, ProblemSource};
pub use types::{Problem, ProblemCatalog};
