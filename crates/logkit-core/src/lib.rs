//! LogKit Core
//!
//! A lightweight per-name logging facade: a process-wide registry creates
//! and caches named [`Logger`] instances, each with its own severity
//! threshold and pluggable output sink ([`Appender`]). The level gate is
//! decided when a logger is configured, not on every call: changing a
//! logger's level or appender rebinds its five severity methods, so a call
//! below the threshold is a plain no-op function call.
//!
//! ```
//! use std::sync::Arc;
//! use logkit_core::{get_logger_with, log_args, Level, LoggerOptions, MemoryAppender};
//!
//! let appender = Arc::new(MemoryAppender::new());
//! let logger = get_logger_with(
//!     "Svc",
//!     LoggerOptions::new()
//!         .with_level(Level::Error)
//!         .with_appender(appender.clone()),
//! );
//!
//! logger.warn(&log_args!["not forwarded"]);
//! logger.error(&log_args!["disk %s is full", "/dev/sda1"]);
//!
//! assert_eq!(appender.len(), 1);
//! assert!(appender.last().unwrap().args[0]
//!     .as_str()
//!     .unwrap()
//!     .starts_with("[ERROR] Svc - "));
//! ```
//!
//! The message template supports console-style substitution patterns
//! (`%s`, `%d`, `%i`, `%f`, `%o`, `%O`); substituting them is the
//! appender's business, the core only prepends the `[LEVEL] name - `
//! prefix and forwards.

pub mod appender;
mod binder;
pub mod has_logger;
pub mod host;
pub mod level;
pub mod logger;
pub mod registry;
pub mod value;

// Re-export the public surface
pub use appender::{
    Appender, AppenderError, AppenderResult, BoxedAppender, CapturedCall, ConsoleAppender,
    CustomAppender, CustomAppenderBuilder, LevelHandler, MemoryAppender, NoOpAppender,
    SharedAppender,
};
pub use has_logger::HasLogger;
pub use host::{FixedHostProbe, HostClass, HostProbe, PlainHostProbe, SharedHostProbe};
pub use level::{Level, UnknownLevelError};
pub use logger::Logger;
pub use registry::{
    clear_all_loggers, get_default_appender, get_default_level, get_logger, get_logger_level,
    get_logger_with, reset, reset_all_appenders, reset_all_levels, reset_default_appender,
    reset_default_level, set_all_appenders, set_all_levels, set_default_appender,
    set_default_level, set_host_probe, set_logger_level, LoggerOptions,
};
pub use value::LogValue;
