// ============================================================================
// Utilities Module
// Helper functions for embedding the counters in an application
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, LoggingConfig};
