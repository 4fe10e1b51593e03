//! No-op appender implementation

use super::traits::Appender;
use crate::value::LogValue;

/// An appender that discards everything
///
/// Useful for testing or when output is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAppender;

impl NoOpAppender {
    /// Create a new no-op appender
    pub fn new() -> Self {
        Self
    }
}

impl Appender for NoOpAppender {
    fn trace(&self, _args: &[LogValue]) {}
    fn debug(&self, _args: &[LogValue]) {}
    fn info(&self, _args: &[LogValue]) {}
    fn warn(&self, _args: &[LogValue]) {}
    fn error(&self, _args: &[LogValue]) {}
}
