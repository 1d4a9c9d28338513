//! Command line tools for transkit

pub mod cli;
pub mod error;
pub mod pull;

pub use cli::{Cli, Command, TranslationsCommand};
pub use error::{PullError, PullResult};
pub use pull::{PullSummary, Puller, TOKEN_ENV_VAR};
