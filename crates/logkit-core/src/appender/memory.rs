//! In-memory appender

use parking_lot::RwLock;

use super::traits::Appender;
use crate::level::Level;
use crate::value::LogValue;

/// One call captured by a [`MemoryAppender`]
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedCall {
    /// The severity method that was invoked
    pub level: Level,
    /// The forwarded arguments, prefix included
    pub args: Vec<LogValue>,
}

/// An appender that records every call for later inspection
///
/// This is the test double used throughout the test suite. Calls are kept in
/// arrival order behind an `RwLock`, so a shared instance is safe to inspect
/// from multiple threads.
///
/// # Example
///
/// ```
/// use logkit_core::{Appender, Level, MemoryAppender};
///
/// let appender = MemoryAppender::new();
/// appender.info(&logkit_core::log_args!["ready"]);
/// assert_eq!(appender.calls()[0].level, Level::Info);
/// ```
#[derive(Debug, Default)]
pub struct MemoryAppender {
    calls: RwLock<Vec<CapturedCall>>,
}

impl MemoryAppender {
    /// Create a new empty memory appender
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of every captured call, in arrival order
    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.read().clone()
    }

    /// The most recently captured call
    pub fn last(&self) -> Option<CapturedCall> {
        self.calls.read().last().cloned()
    }

    /// Number of captured calls
    pub fn len(&self) -> usize {
        self.calls.read().len()
    }

    /// Check whether nothing was captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all captured calls
    pub fn clear(&self) {
        self.calls.write().clear();
    }

    fn record(&self, level: Level, args: &[LogValue]) {
        self.calls.write().push(CapturedCall {
            level,
            args: args.to_vec(),
        });
    }
}

impl Appender for MemoryAppender {
    fn trace(&self, args: &[LogValue]) {
        self.record(Level::Trace, args);
    }

    fn debug(&self, args: &[LogValue]) {
        self.record(Level::Debug, args);
    }

    fn info(&self, args: &[LogValue]) {
        self.record(Level::Info, args);
    }

    fn warn(&self, args: &[LogValue]) {
        self.record(Level::Warn, args);
    }

    fn error(&self, args: &[LogValue]) {
        self.record(Level::Error, args);
    }
}
