//! Shared plumbing for the PanelKit console crates

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{PanelError, Result};
pub use logging::{
    init_default_logging, init_dev_logging, init_logging, init_prod_logging, LoggingConfig,
};
