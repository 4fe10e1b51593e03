//! Appender assembled from per-level closures

use std::fmt;

use super::traits::{Appender, AppenderError, AppenderResult};
use crate::value::LogValue;

/// Handler function for one severity method
pub type LevelHandler = Box<dyn Fn(&[LogValue]) + Send + Sync>;

/// An appender assembled from five per-level handlers
///
/// This is the adapter for sinks that are not written as an [`Appender`]
/// implementation, e.g. a bundle of callbacks handed over by a host
/// application. The builder enforces the appender contract: every one of the
/// five severity methods must have a handler.
///
/// # Example
///
/// ```
/// use logkit_core::CustomAppender;
///
/// let appender = CustomAppender::builder()
///     .trace(|_| {})
///     .debug(|_| {})
///     .info(|args| println!("{:?}", args))
///     .warn(|_| {})
///     .error(|_| {})
///     .build()
///     .unwrap();
/// ```
pub struct CustomAppender {
    trace: LevelHandler,
    debug: LevelHandler,
    info: LevelHandler,
    warn: LevelHandler,
    error: LevelHandler,
}

impl CustomAppender {
    /// Start assembling a custom appender
    pub fn builder() -> CustomAppenderBuilder {
        CustomAppenderBuilder::new()
    }
}

impl fmt::Debug for CustomAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomAppender").finish()
    }
}

impl Appender for CustomAppender {
    fn trace(&self, args: &[LogValue]) {
        (self.trace)(args);
    }

    fn debug(&self, args: &[LogValue]) {
        (self.debug)(args);
    }

    fn info(&self, args: &[LogValue]) {
        (self.info)(args);
    }

    fn warn(&self, args: &[LogValue]) {
        (self.warn)(args);
    }

    fn error(&self, args: &[LogValue]) {
        (self.error)(args);
    }
}

/// Builder for [`CustomAppender`]
#[derive(Default)]
pub struct CustomAppenderBuilder {
    trace: Option<LevelHandler>,
    debug: Option<LevelHandler>,
    info: Option<LevelHandler>,
    warn: Option<LevelHandler>,
    error: Option<LevelHandler>,
}

impl CustomAppenderBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `trace` handler
    pub fn trace<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[LogValue]) + Send + Sync + 'static,
    {
        self.trace = Some(Box::new(handler));
        self
    }

    /// Set the `debug` handler
    pub fn debug<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[LogValue]) + Send + Sync + 'static,
    {
        self.debug = Some(Box::new(handler));
        self
    }

    /// Set the `info` handler
    pub fn info<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[LogValue]) + Send + Sync + 'static,
    {
        self.info = Some(Box::new(handler));
        self
    }

    /// Set the `warn` handler
    pub fn warn<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[LogValue]) + Send + Sync + 'static,
    {
        self.warn = Some(Box::new(handler));
        self
    }

    /// Set the `error` handler
    pub fn error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[LogValue]) + Send + Sync + 'static,
    {
        self.error = Some(Box::new(handler));
        self
    }

    /// Validate the contract and build the appender
    ///
    /// Fails with [`AppenderError::MissingMethod`] naming the first handler
    /// that is absent, checked in TRACE to ERROR order.
    pub fn build(self) -> AppenderResult<CustomAppender> {
        let Some(trace) = self.trace else {
            return Err(AppenderError::MissingMethod { method: "trace" });
        };
        let Some(debug) = self.debug else {
            return Err(AppenderError::MissingMethod { method: "debug" });
        };
        let Some(info) = self.info else {
            return Err(AppenderError::MissingMethod { method: "info" });
        };
        let Some(warn) = self.warn else {
            return Err(AppenderError::MissingMethod { method: "warn" });
        };
        let Some(error) = self.error else {
            return Err(AppenderError::MissingMethod { method: "error" });
        };
        Ok(CustomAppender {
            trace,
            debug,
            info,
            warn,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn complete_builder() -> CustomAppenderBuilder {
        CustomAppender::builder()
            .trace(|_| {})
            .debug(|_| {})
            .info(|_| {})
            .warn(|_| {})
            .error(|_| {})
    }

    #[test]
    fn test_complete_builder_builds() {
        assert!(complete_builder().build().is_ok());
    }

    #[test]
    fn test_empty_builder_names_trace_first() {
        let err = CustomAppender::builder().build().unwrap_err();
        assert_eq!(err, AppenderError::MissingMethod { method: "trace" });
    }

    #[test]
    fn test_missing_handler_is_named() {
        let err = CustomAppender::builder()
            .trace(|_| {})
            .debug(|_| {})
            .info(|_| {})
            .error(|_| {})
            .build()
            .unwrap_err();
        assert_eq!(err, AppenderError::MissingMethod { method: "warn" });
    }

    #[test]
    fn test_first_missing_handler_wins() {
        // Both debug and error are absent; the check runs in level order
        let err = CustomAppender::builder()
            .trace(|_| {})
            .info(|_| {})
            .warn(|_| {})
            .build()
            .unwrap_err();
        assert_eq!(err, AppenderError::MissingMethod { method: "debug" });
    }

    #[test]
    fn test_handlers_receive_the_arguments() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let appender = complete_builder()
            .info(move |args| {
                assert_eq!(args.len(), 2);
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        appender.info(&crate::log_args!["msg %d", 1]);
        appender.warn(&crate::log_args!["ignored"]);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
