//! Capability interface for logger-carrying types

use std::sync::Arc;

use crate::logger::Logger;

/// A type that carries a named logger
///
/// The logger is fetched from the registry under the type's own name, so
/// every instance of the type shares one logger and its configuration.
///
/// Implement the trait by hand for a custom name, or use
/// [`has_logger!`](crate::has_logger) to derive it from the type name:
///
/// ```
/// use logkit_core::{has_logger, HasLogger};
///
/// struct OrderService;
/// has_logger!(OrderService);
///
/// let service = OrderService;
/// assert_eq!(service.logger().name(), "OrderService");
/// ```
pub trait HasLogger {
    /// The name under which this type's logger is registered
    fn logger_name(&self) -> &str;

    /// The registry logger for this type
    fn logger(&self) -> Arc<Logger> {
        crate::registry::get_logger(self.logger_name())
    }
}

/// Implement [`HasLogger`] for a type, using the type's name as the logger
/// name
///
/// Applying the macro twice to the same type, or alongside a manual
/// `HasLogger` impl, is a compile-time conflicting-implementation error.
#[macro_export]
macro_rules! has_logger {
    ($type:ty) => {
        impl $crate::HasLogger for $type {
            fn logger_name(&self) -> &str {
                stringify!($type)
            }
        }
    };
}

/// Trace a method call through the named logger of its type
///
/// `trace_call!("Person", "eat")` logs `%s.%s.` with the type and method
/// names; with extra arguments it logs `%s.%s:` followed by the arguments.
///
/// ```
/// use logkit_core::trace_call;
///
/// trace_call!("Person", "eat");
/// trace_call!("Person", "eat", "breakfast", 2);
/// ```
#[macro_export]
macro_rules! trace_call {
    ($type_name:expr, $method:expr $(,)?) => {
        $crate::get_logger($type_name).trace(&$crate::log_args!["%s.%s.", $type_name, $method])
    };
    ($type_name:expr, $method:expr, $($arg:expr),+ $(,)?) => {
        $crate::get_logger($type_name)
            .trace(&$crate::log_args!["%s.%s:", $type_name, $method, $($arg),+])
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::appender::{MemoryAppender, SharedAppender};
    use crate::level::Level;
    use crate::registry::test_support::serialize_registry_tests;
    use crate::registry::{get_logger_with, LoggerOptions};
    use crate::value::LogValue;

    struct Worker;
    crate::has_logger!(Worker);

    struct Pump;

    impl HasLogger for Pump {
        fn logger_name(&self) -> &str {
            "hydraulics"
        }
    }

    #[test]
    fn test_macro_uses_the_type_name() {
        let _guard = serialize_registry_tests();
        let worker = Worker;
        assert_eq!(worker.logger_name(), "Worker");
        assert_eq!(worker.logger().name(), "Worker");
    }

    #[test]
    fn test_manual_impl_uses_its_own_name() {
        let _guard = serialize_registry_tests();
        let pump = Pump;
        assert_eq!(pump.logger().name(), "hydraulics");
    }

    #[test]
    fn test_instances_share_one_logger() {
        let _guard = serialize_registry_tests();
        let first = Worker.logger();
        let second = Worker.logger();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_trace_call_logs_the_signature() {
        let _guard = serialize_registry_tests();
        let appender = Arc::new(MemoryAppender::new());
        let shared: SharedAppender = appender.clone();
        get_logger_with(
            "Person",
            LoggerOptions::new()
                .with_level(Level::Trace)
                .with_appender(shared),
        );

        crate::trace_call!("Person", "eat");
        crate::trace_call!("Person", "eat", "breakfast", 2);

        let calls = appender.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].args,
            vec![
                LogValue::Str("[TRACE] Person - %s.%s.".to_string()),
                LogValue::Str("Person".to_string()),
                LogValue::Str("eat".to_string()),
            ]
        );
        assert_eq!(calls[1].args.len(), 5);
        assert_eq!(calls[1].args[0].as_str(), Some("[TRACE] Person - %s.%s:"));
        assert_eq!(calls[1].args[4], LogValue::Int(2));
    }
}
