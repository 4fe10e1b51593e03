//! Rebinds a logger's severity methods to its appender
//!
//! The level gate is decided here, once per configuration change, instead of
//! on every call: methods below the threshold are bound to a shared no-op,
//! methods at or above it to a forwarding closure that captured its prefix
//! and appender at bind time. A below-threshold call is a plain function
//! call that discards its arguments.

mod prefix;

use std::sync::Arc;

use crate::appender::SharedAppender;
use crate::level::Level;
use crate::value::LogValue;

pub(crate) use prefix::{fix_first_argument, logging_prefix};

/// How the bind-time prefix is threaded into a forwarded call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrefixStrategy {
    /// The sink substitutes patterns in the first argument recursively, so
    /// the prefix travels as its own leading `"<prefix>%s"` template
    /// argument and the original message stays untouched.
    RecursiveTemplate,
    /// Merge the prefix into the call's first argument.
    #[default]
    MergeFirstArgument,
}

/// One bound severity method
pub(crate) type BoundMethod = Arc<dyn Fn(&[LogValue]) + Send + Sync>;

/// The five bound severity methods of a logger
///
/// `Level::None` has no slot; as a threshold it makes every slot a no-op.
#[derive(Clone)]
pub(crate) struct MethodTable {
    trace: BoundMethod,
    debug: BoundMethod,
    info: BoundMethod,
    warn: BoundMethod,
    error: BoundMethod,
}

impl MethodTable {
    /// The bound method for `level`, or `None` for the `None` sentinel
    pub(crate) fn get(&self, level: Level) -> Option<&BoundMethod> {
        match level {
            Level::Trace => Some(&self.trace),
            Level::Debug => Some(&self.debug),
            Level::Info => Some(&self.info),
            Level::Warn => Some(&self.warn),
            Level::Error => Some(&self.error),
            Level::None => None,
        }
    }
}

/// Build the method table for a `(level, appender)` pair
///
/// The returned table fully replaces any previous one; no reference to a
/// previously bound appender survives a rebind.
pub(crate) fn bind_logging_methods(
    name: &str,
    level: Level,
    appender: &SharedAppender,
    strategy: PrefixStrategy,
) -> MethodTable {
    let noop: BoundMethod = Arc::new(|_args: &[LogValue]| {});
    let slot = |severity: Level| -> BoundMethod {
        if severity.rank() < level.rank() {
            return Arc::clone(&noop);
        }
        let prefix = logging_prefix(name, severity);
        let appender = Arc::clone(appender);
        match strategy {
            PrefixStrategy::RecursiveTemplate => {
                let template = LogValue::Str(format!("{prefix}%s"));
                Arc::new(move |args: &[LogValue]| {
                    let mut forwarded = Vec::with_capacity(args.len() + 1);
                    forwarded.push(template.clone());
                    forwarded.extend_from_slice(args);
                    appender.append(severity, &forwarded);
                })
            }
            PrefixStrategy::MergeFirstArgument => Arc::new(move |args: &[LogValue]| {
                appender.append(severity, &fix_first_argument(&prefix, args));
            }),
        }
    };
    MethodTable {
        trace: slot(Level::Trace),
        debug: slot(Level::Debug),
        info: slot(Level::Info),
        warn: slot(Level::Warn),
        error: slot(Level::Error),
    }
}
