//! Host log sink management

use dataconverter_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Host logger receiving rendered plugin log lines
///
/// Arguments are the level, the target (module path), and the message.
pub type LogSink = Arc<dyn Fn(LogLevel, &str, &str) + Send + Sync>;

/// Global sink manager
static SINK_MANAGER: OnceCell<LogSinkManager> = OnceCell::new();

/// Holds the host sink and the minimum enabled level
pub struct LogSinkManager {
    sink: RwLock<Option<LogSink>>,
    level: AtomicU8,
}

impl LogSinkManager {
    /// Create a manager with no sink and level Info
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global sink manager instance
    pub fn global() -> &'static LogSinkManager {
        SINK_MANAGER.get_or_init(LogSinkManager::new)
    }

    /// Install or clear the host sink
    pub fn set_sink(&self, sink: Option<LogSink>) {
        *self.sink.write() = sink;
    }

    /// Current host sink
    pub fn sink(&self) -> Option<LogSink> {
        self.sink.read().clone()
    }

    /// Set the minimum level
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the minimum level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is enabled
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Forward a line to the sink if one is set and the level is enabled
    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        // Sink runs outside the lock
        let Some(sink) = self.sink() else {
            return;
        };

        sink(level, target, message);
    }
}

impl Default for LogSinkManager {
    fn default() -> Self {
        Self::new()
    }
}
