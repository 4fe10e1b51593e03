//! Named logger instances

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::appender::SharedAppender;
use crate::binder::{bind_logging_methods, BoundMethod, MethodTable};
use crate::level::Level;
use crate::registry;
use crate::value::LogValue;

/// A named logging facade gating and forwarding log calls
///
/// A `Logger` combines an immutable name with a mutable `(level, appender)`
/// pair and the five severity methods bound to that pair. The binding is
/// rebuilt whenever the level or appender changes, so a call below the
/// threshold is a no-op function call rather than a comparison made on every
/// invocation.
///
/// Instances are created and cached by the registry; obtain one with
/// [`crate::registry::get_logger`]. Repeated lookups of the same name return
/// the same shared instance.
///
/// # Example
///
/// ```
/// use logkit_core::{get_logger, log_info};
///
/// let logger = get_logger("worker");
/// log_info!(logger, "job %d finished", 7);
/// ```
pub struct Logger {
    name: String,
    state: RwLock<LoggerState>,
}

struct LoggerState {
    level: Level,
    appender: SharedAppender,
    methods: MethodTable,
}

impl Logger {
    /// Construct a logger with its methods already bound
    ///
    /// Only the registry creates instances; the lookup-or-create path is the
    /// single entry point, which keeps per-name identity stable.
    pub(crate) fn new(
        name: String,
        level: Level,
        appender: SharedAppender,
        strategy: crate::binder::PrefixStrategy,
    ) -> Self {
        let methods = bind_logging_methods(&name, level, &appender, strategy);
        Self {
            name,
            state: RwLock::new(LoggerState {
                level,
                appender,
                methods,
            }),
        }
    }

    /// The name of this logger; the empty string names the anonymous logger
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current appender of this logger
    pub fn appender(&self) -> SharedAppender {
        Arc::clone(&self.state.read().appender)
    }

    /// Replace the appender, rebinding the severity methods at the current
    /// level
    ///
    /// The rebind and the stored reference change together under the state
    /// lock; a concurrent reader never observes methods bound to one
    /// appender while [`Logger::appender`] reports another.
    pub fn set_appender(&self, appender: SharedAppender) {
        let strategy = registry::current_prefix_strategy();
        let mut state = self.state.write();
        state.methods = bind_logging_methods(&self.name, state.level, &appender, strategy);
        state.appender = appender;
    }

    /// The current logging level of this logger
    pub fn level(&self) -> Level {
        self.state.read().level
    }

    /// Set the logging level, rebinding the severity methods
    ///
    /// The new level is also recorded in the registry's per-name level
    /// memory. To set a level from text, parse it first:
    /// `"warn".parse::<Level>()?` accepts any letter case and rejects
    /// unknown names.
    pub fn set_level(&self, level: Level) {
        let strategy = registry::current_prefix_strategy();
        {
            let mut state = self.state.write();
            state.methods = bind_logging_methods(&self.name, level, &state.appender, strategy);
            state.level = level;
        }
        registry::record_level(&self.name, level);
    }

    /// Silence this logger without changing its stored level
    pub fn disable(&self) {
        let strategy = registry::current_prefix_strategy();
        let mut state = self.state.write();
        state.methods = bind_logging_methods(&self.name, Level::None, &state.appender, strategy);
    }

    /// Restore the bindings for the stored level
    pub fn enable(&self) {
        let strategy = registry::current_prefix_strategy();
        let mut state = self.state.write();
        state.methods = bind_logging_methods(&self.name, state.level, &state.appender, strategy);
    }

    /// Enable or disable this logger
    pub fn set_enabled(&self, enabled: bool) {
        if enabled {
            self.enable();
        } else {
            self.disable();
        }
    }

    /// Log at a level named at runtime
    ///
    /// The name is matched case-insensitively. Unlike the strict level
    /// parser, this entry point never fails: an unrecognized name, and the
    /// `NONE` sentinel which has no severity method, are silently ignored.
    pub fn log(&self, level: &str, args: &[LogValue]) {
        let Ok(level) = level.parse::<Level>() else {
            return;
        };
        let method = {
            let state = self.state.read();
            if level < state.level {
                return;
            }
            match state.methods.get(level) {
                Some(method) => Arc::clone(method),
                None => return,
            }
        };
        method(args);
    }

    /// Log a message in the `TRACE` level
    pub fn trace(&self, args: &[LogValue]) {
        self.dispatch(Level::Trace, args);
    }

    /// Log a message in the `DEBUG` level
    pub fn debug(&self, args: &[LogValue]) {
        self.dispatch(Level::Debug, args);
    }

    /// Log a message in the `INFO` level
    pub fn info(&self, args: &[LogValue]) {
        self.dispatch(Level::Info, args);
    }

    /// Log a message in the `WARN` level
    pub fn warn(&self, args: &[LogValue]) {
        self.dispatch(Level::Warn, args);
    }

    /// Log a message in the `ERROR` level
    pub fn error(&self, args: &[LogValue]) {
        self.dispatch(Level::Error, args);
    }

    fn dispatch(&self, level: Level, args: &[LogValue]) {
        let method: Option<BoundMethod> = {
            let state = self.state.read();
            state.methods.get(level).map(Arc::clone)
        };
        // invoked outside the lock; the appender may take arbitrary time
        if let Some(method) = method {
            method(args);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish()
    }
}

/// Log a `TRACE` message through a logger
///
/// `log_trace!(logger, "a %s", x)` expands to
/// `logger.trace(&log_args!["a %s", x])`.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr $(,)?) => {
        $logger.trace(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.trace(&$crate::log_args![$($arg),+])
    };
}

/// Log a `DEBUG` message through a logger
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(,)?) => {
        $logger.debug(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug(&$crate::log_args![$($arg),+])
    };
}

/// Log an `INFO` message through a logger
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(,)?) => {
        $logger.info(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info(&$crate::log_args![$($arg),+])
    };
}

/// Log a `WARN` message through a logger
#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(,)?) => {
        $logger.warn(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn(&$crate::log_args![$($arg),+])
    };
}

/// Log an `ERROR` message through a logger
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(,)?) => {
        $logger.error(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error(&$crate::log_args![$($arg),+])
    };
}
