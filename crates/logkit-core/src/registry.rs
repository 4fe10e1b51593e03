//! Process-wide registry of named loggers
//!
//! The registry owns every `Logger` instance, the per-name level memory, and
//! the global defaults used to construct new instances. All state lives
//! behind a single lock with an explicit factory-reset lifecycle, so tests
//! can restore a clean slate with [`reset`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::appender::{ConsoleAppender, SharedAppender};
use crate::binder::PrefixStrategy;
use crate::host::{PlainHostProbe, SharedHostProbe};
use crate::level::Level;
use crate::logger::Logger;

/// The factory value of the default logging level
const FACTORY_DEFAULT_LEVEL: Level = Level::Debug;

/// The factory value of the default appender
fn factory_default_appender() -> SharedAppender {
    Arc::new(ConsoleAppender::new())
}

struct RegistryState {
    /// name -> live instance
    instances: HashMap<String, Arc<Logger>>,
    /// name -> last assigned level; survives the instance
    level_memory: HashMap<String, Level>,
    default_level: Level,
    default_appender: SharedAppender,
    probe: SharedHostProbe,
}

static REGISTRY: Lazy<RwLock<RegistryState>> = Lazy::new(|| {
    RwLock::new(RegistryState {
        instances: HashMap::new(),
        level_memory: HashMap::new(),
        default_level: FACTORY_DEFAULT_LEVEL,
        default_appender: factory_default_appender(),
        probe: Arc::new(PlainHostProbe),
    })
});

/// Options for [`get_logger_with`]
///
/// Both fields are optional: on a fresh name an absent level falls back to
/// the name's remembered level and then to the global default, an absent
/// appender to the global default appender. On an existing instance only the
/// fields that are present are applied.
#[derive(Clone, Default)]
pub struct LoggerOptions {
    level: Option<Level>,
    appender: Option<SharedAppender>,
}

impl LoggerOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a logging level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Request an appender
    pub fn with_appender(mut self, appender: SharedAppender) -> Self {
        self.appender = Some(appender);
        self
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("level", &self.level)
            .field("has_appender", &self.appender.is_some())
            .finish()
    }
}

/// Get the logger of the given name, creating it on first use
///
/// The empty string names the anonymous logger. A new instance starts at the
/// name's remembered level if one exists, else at the default level, with
/// the default appender.
///
/// # Example
///
/// ```
/// use logkit_core::get_logger;
///
/// let logger = get_logger("db.pool");
/// logger.info(&logkit_core::log_args!["pool ready, %d connections", 8]);
/// ```
pub fn get_logger(name: &str) -> Arc<Logger> {
    get_logger_with(name, LoggerOptions::default())
}

/// Get the logger of the given name, creating or reconfiguring it
///
/// When an instance already exists it is returned with the given options
/// applied through its own setters; instance identity is stable across
/// repeated lookups of the same name until [`clear_all_loggers`] or
/// [`reset`].
pub fn get_logger_with(name: &str, options: LoggerOptions) -> Arc<Logger> {
    let (logger, existed) = {
        let mut registry = REGISTRY.write();
        match registry.instances.get(name) {
            Some(existing) => (Arc::clone(existing), true),
            None => {
                let level = options
                    .level
                    .or_else(|| registry.level_memory.get(name).copied())
                    .unwrap_or(registry.default_level);
                let appender = options
                    .appender
                    .clone()
                    .unwrap_or_else(|| Arc::clone(&registry.default_appender));
                let strategy = registry.probe.classify().prefix_strategy();
                let logger = Arc::new(Logger::new(name.to_string(), level, appender, strategy));
                registry.instances.insert(name.to_string(), Arc::clone(&logger));
                registry.level_memory.insert(name.to_string(), level);
                (logger, false)
            }
        }
    };
    if existed {
        if let Some(appender) = options.appender {
            logger.set_appender(appender);
        }
        if let Some(level) = options.level {
            logger.set_level(level);
        }
    }
    logger
}

/// Clear all logger instances and the per-name level memory
///
/// Names looked up afterwards start over from the default level.
pub fn clear_all_loggers() {
    let mut registry = REGISTRY.write();
    registry.instances.clear();
    registry.level_memory.clear();
}

/// The remembered level of a name, or the default level
///
/// Pure read; no instance is created.
pub fn get_logger_level(name: &str) -> Level {
    let registry = REGISTRY.read();
    registry
        .level_memory
        .get(name)
        .copied()
        .unwrap_or(registry.default_level)
}

/// Record a level for a name, updating the live instance if there is one
///
/// No instance is created; a logger of that name constructed later starts at
/// the recorded level.
pub fn set_logger_level(name: &str, level: Level) {
    let instance = {
        let mut registry = REGISTRY.write();
        registry.level_memory.insert(name.to_string(), level);
        registry.instances.get(name).map(Arc::clone)
    };
    if let Some(logger) = instance {
        logger.set_level(level);
    }
}

/// The default level used to construct new loggers
pub fn get_default_level() -> Level {
    REGISTRY.read().default_level
}

/// Set the default level used to construct new loggers
///
/// Live instances are not affected; see [`set_all_levels`].
pub fn set_default_level(level: Level) {
    REGISTRY.write().default_level = level;
}

/// Restore the factory default level, `DEBUG`
pub fn reset_default_level() {
    REGISTRY.write().default_level = FACTORY_DEFAULT_LEVEL;
}

/// Set the level of every live logger
///
/// The default level, and the memory of names with no live instance, are
/// untouched.
pub fn set_all_levels(level: Level) {
    for logger in live_instances() {
        logger.set_level(level);
    }
}

/// Set the level of every live logger to the default level
pub fn reset_all_levels() {
    set_all_levels(get_default_level());
}

/// The default appender used to construct new loggers
pub fn get_default_appender() -> SharedAppender {
    Arc::clone(&REGISTRY.read().default_appender)
}

/// Set the default appender used to construct new loggers
///
/// Live instances are not affected; see [`set_all_appenders`].
pub fn set_default_appender(appender: SharedAppender) {
    REGISTRY.write().default_appender = appender;
}

/// Restore the factory default appender, the console
pub fn reset_default_appender() {
    REGISTRY.write().default_appender = factory_default_appender();
}

/// Set the appender of every live logger
pub fn set_all_appenders(appender: SharedAppender) {
    for logger in live_instances() {
        logger.set_appender(Arc::clone(&appender));
    }
}

/// Set the appender of every live logger to the default appender
pub fn reset_all_appenders() {
    set_all_appenders(get_default_appender());
}

/// Install the host probe consulted when loggers (re)bind their methods
pub fn set_host_probe(probe: SharedHostProbe) {
    REGISTRY.write().probe = probe;
}

/// Reset the registry to its factory state
///
/// Equivalent to calling [`clear_all_loggers`], [`reset_default_level`] and
/// [`reset_default_appender`] in sequence.
pub fn reset() {
    clear_all_loggers();
    reset_default_level();
    reset_default_appender();
}

/// Snapshot of the live instances, taken without holding the lock across
/// the per-logger calls that follow
fn live_instances() -> Vec<Arc<Logger>> {
    REGISTRY.read().instances.values().map(Arc::clone).collect()
}

/// Record a name's level in the registry memory
pub(crate) fn record_level(name: &str, level: Level) {
    REGISTRY.write().level_memory.insert(name.to_string(), level);
}

/// The prefix strategy for the currently installed host probe
pub(crate) fn current_prefix_strategy() -> PrefixStrategy {
    let probe = Arc::clone(&REGISTRY.read().probe);
    probe.classify().prefix_strategy()
}
