//! Common error and logging infrastructure for transkit

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{Result, TransKitError};
pub use logging::{init_dev_logging, init_logging, LoggingConfig};
