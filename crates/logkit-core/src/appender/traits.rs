//! Appender trait definition

use std::sync::Arc;

use thiserror::Error;

use crate::level::Level;
use crate::value::LogValue;

/// Output sink of a logger
///
/// An appender receives the calls a logger decided to forward. The first
/// element of `args`, when present, is a template string carrying the
/// `[LEVEL] name - ` prefix; substitution of `%s`/`%d`/`%f`/`%o` patterns in
/// it is the appender's responsibility, not the logger's.
///
/// Implementations:
/// - `ConsoleAppender`: renders to stdout/stderr (the factory default)
/// - `NoOpAppender`: discards everything
/// - `MemoryAppender`: records calls for inspection in tests
/// - `CustomAppender`: adapts five closures into a sink
pub trait Appender: Send + Sync {
    /// Write a `TRACE` entry
    fn trace(&self, args: &[LogValue]);

    /// Write a `DEBUG` entry
    fn debug(&self, args: &[LogValue]);

    /// Write an `INFO` entry
    fn info(&self, args: &[LogValue]);

    /// Write a `WARN` entry
    fn warn(&self, args: &[LogValue]);

    /// Write an `ERROR` entry
    fn error(&self, args: &[LogValue]);

    /// Forward `args` to the severity method matching `level`
    ///
    /// `Level::None` is not a callable severity; it is ignored.
    fn append(&self, level: Level, args: &[LogValue]) {
        match level {
            Level::Trace => self.trace(args),
            Level::Debug => self.debug(args),
            Level::Info => self.info(args),
            Level::Warn => self.warn(args),
            Level::Error => self.error(args),
            Level::None => {}
        }
    }
}

/// Type alias for a boxed appender
pub type BoxedAppender = Box<dyn Appender>;

/// Type alias for an Arc-wrapped appender
pub type SharedAppender = Arc<dyn Appender>;

/// Errors that can occur while assembling an appender
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppenderError {
    /// A required severity method has no handler
    #[error("the appender has no {method}() method")]
    MissingMethod { method: &'static str },
}

pub type AppenderResult<T> = Result<T, AppenderError>;
