// ============================================================================
// Logging Setup
// Installs a tracing-subscriber fmt subscriber for the counting events
// ============================================================================

use tracing::Level;

/// Settings for the global `fmt` subscriber.
///
/// Rejected calls are reported at `DEBUG`, completed counts at `TRACE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level that is emitted
    pub level: Level,
    /// Include the event target (module path) in each line
    pub with_target: bool,
    /// Colorize output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
/// Fails if a global subscriber has already been set.
pub fn init_logging(
    config: LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .try_init()
}
