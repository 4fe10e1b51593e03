//! Logging prefix construction and first-argument merging

use crate::level::Level;
use crate::value::LogValue;

/// The textual prefix for a logger name and level
///
/// `"[LEVEL] "` for the anonymous logger, `"[LEVEL] name - "` otherwise.
pub(crate) fn logging_prefix(name: &str, level: Level) -> String {
    if name.is_empty() {
        format!("[{level}] ")
    } else {
        format!("[{level}] {name} - ")
    }
}

/// Merge the prefix into a call's argument list
///
/// A string-like first argument absorbs the prefix, so substitution patterns
/// inside the original message keep their argument positions. Any other
/// first argument gets the bare prefix inserted as its own leading argument,
/// with the original arguments verbatim after it. The bare prefix carries no
/// trailing template marker; downstream consumers depend on this shape.
pub(crate) fn fix_first_argument(prefix: &str, args: &[LogValue]) -> Vec<LogValue> {
    match args.split_first() {
        None => vec![LogValue::Str(prefix.to_string())],
        Some((LogValue::Str(first), rest)) => {
            let mut fixed = Vec::with_capacity(args.len());
            fixed.push(LogValue::Str(format!("{prefix}{first}")));
            fixed.extend_from_slice(rest);
            fixed
        }
        Some(_) => {
            let mut fixed = Vec::with_capacity(args.len() + 1);
            fixed.push(LogValue::Str(prefix.to_string()));
            fixed.extend_from_slice(args);
            fixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_args;

    #[test]
    fn test_prefix_with_name() {
        assert_eq!(logging_prefix("MyLogger", Level::Info), "[INFO] MyLogger - ");
    }

    #[test]
    fn test_prefix_for_anonymous_logger() {
        assert_eq!(logging_prefix("", Level::Error), "[ERROR] ");
    }

    #[test]
    fn test_fix_empty_arguments() {
        let fixed = fix_first_argument("[PREFIX] ", &[]);
        assert_eq!(fixed, vec![LogValue::Str("[PREFIX] ".to_string())]);
    }

    #[test]
    fn test_fix_string_first_argument() {
        let fixed = fix_first_argument("[PREFIX] ", &log_args!["message", 1, 2]);
        assert_eq!(
            fixed,
            vec![
                LogValue::Str("[PREFIX] message".to_string()),
                LogValue::Int(1),
                LogValue::Int(2),
            ]
        );
    }

    #[test]
    fn test_fix_non_string_first_argument() {
        // The bare prefix becomes its own leading argument, without a
        // trailing template marker
        let fixed = fix_first_argument("[PREFIX] ", &log_args![LogValue::object("v"), 1, 2]);
        assert_eq!(
            fixed,
            vec![
                LogValue::Str("[PREFIX] ".to_string()),
                LogValue::Object("\"v\"".to_string()),
                LogValue::Int(1),
                LogValue::Int(2),
            ]
        );
    }
}
