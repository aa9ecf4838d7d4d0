//! dataconverter-logging - Tracing to host logger bridge
//!
//! This crate provides:
//! - [`HostLoggingLayer`] tracing layer that forwards logs to the host sink
//! - [`LogSink`] type for the host logger
//! - Dynamic log level filtering through [`set_log_level`]

mod layer;
mod reload;
mod sink;

pub use dataconverter_core::LogLevel;
pub use layer::{HostLoggingLayer, init_logging};
pub use reload::{ReloadHandle, set_log_level};
pub use sink::{LogSink, LogSinkManager};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        HostLoggingLayer, LogLevel, LogSink, LogSinkManager, init_logging, set_log_level,
    };
}
