//! Logging levels and their ranks

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log message, ordered from least to most severe
///
/// `None` is a sentinel threshold that suppresses all output; it is never a
/// valid target for an actual log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Level {
    /// Fine-grained tracing output
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// General information
    Info = 2,
    /// Warning messages
    Warn = 3,
    /// Error messages
    Error = 4,
    /// Suppress everything
    None = 5,
}

impl Level {
    /// The five real severities, in rank order. Excludes the `None` sentinel.
    pub const SEVERITIES: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Every level, including the `None` sentinel.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::None,
    ];

    /// Numeric rank of this level (0..5)
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Uppercase name of this level
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::None => "NONE",
        }
    }

    /// Lowercase name of the severity method matching this level
    pub const fn method_name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::None => "none",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a logging level
///
/// Level names are matched case-insensitively; anything outside the six-name
/// set is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown logging level \"{given}\"; possible values are \
     [\"TRACE\", \"DEBUG\", \"INFO\", \"WARN\", \"ERROR\", \"NONE\"]"
)]
pub struct UnknownLevelError {
    /// The rejected input, as given by the caller
    pub given: String,
}

impl FromStr for Level {
    type Err = UnknownLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "NONE" => Ok(Level::None),
            _ => Err(UnknownLevelError {
                given: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = UnknownLevelError;

    fn try_from(s: &str) -> Result<Self, UnknownLevelError> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_totally_ordered() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::None);
    }

    #[test]
    fn test_ranks() {
        let ranks: Vec<u8> = Level::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_severities_exclude_none() {
        assert_eq!(Level::SEVERITIES.len(), 5);
        assert!(!Level::SEVERITIES.contains(&Level::None));
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Level::Trace.to_string(), "TRACE");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::None.to_string(), "NONE");
    }

    #[test]
    fn test_method_name_is_lowercase() {
        assert_eq!(Level::Debug.method_name(), "debug");
        assert_eq!(Level::Error.method_name(), "error");
    }

    #[test]
    fn test_parse_accepts_any_letter_case() {
        for level in Level::ALL {
            let upper = level.as_str();
            assert_eq!(upper.parse::<Level>().unwrap(), level);
            assert_eq!(upper.to_lowercase().parse::<Level>().unwrap(), level);
        }
        assert_eq!("dEbUg".parse::<Level>().unwrap(), Level::Debug);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.given, "verbose");

        let message = err.to_string();
        for name in ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "NONE"] {
            assert!(message.contains(name), "message should list {name}");
        }
    }

    #[test]
    fn test_parse_rejects_empty_string() {
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Level::try_from("warn").unwrap(), Level::Warn);
        assert!(Level::try_from("bogus").is_err());
    }
}
