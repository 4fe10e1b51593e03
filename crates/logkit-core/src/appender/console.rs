//! Console appender implementation

use super::traits::Appender;
use crate::value::LogValue;

/// An appender that renders entries to the console
///
/// This is the factory default appender. `trace`, `debug`, `warn` and
/// `error` entries go to stderr; `info` entries go to stdout. A string-like
/// first argument is treated as a template and the remaining arguments are
/// substituted into it; see [`ConsoleAppender::render`] for the supported
/// patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    /// Create a new console appender
    pub fn new() -> Self {
        Self
    }

    /// Render a call's arguments to a single line
    ///
    /// When the first argument is string-like it is used as a template and
    /// the following substitution patterns consume one argument each:
    ///
    /// - `%s`: the argument as plain text
    /// - `%d` or `%i`: the argument as an integer (floats are truncated)
    /// - `%f`: the argument as a floating-point value
    /// - `%o` or `%O`: the argument in its object representation
    /// - `%%`: a literal percent sign, consuming no argument
    ///
    /// Patterns with no argument left are kept verbatim, and arguments not
    /// consumed by the template are appended space-separated. When the first
    /// argument is not string-like, all arguments are rendered
    /// space-separated.
    pub fn render(args: &[LogValue]) -> String {
        match args.split_first() {
            None => String::new(),
            Some((LogValue::Str(template), rest)) => substitute(template, rest),
            Some(_) => join(args),
        }
    }
}

fn join(args: &[LogValue]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn substitute(template: &str, args: &[LogValue]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0usize;
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(directive @ ('s' | 'd' | 'i' | 'f' | 'o' | 'O')) if next < args.len() => {
                chars.next();
                out.push_str(&render_directive(directive, &args[next]));
                next += 1;
            }
            // unknown directive, or no argument left: keep the '%' verbatim
            _ => out.push('%'),
        }
    }
    for arg in &args[next..] {
        out.push(' ');
        out.push_str(&arg.to_string());
    }
    out
}

fn render_directive(directive: char, arg: &LogValue) -> String {
    match directive {
        'd' | 'i' => match arg {
            LogValue::Float(f) => format!("{}", *f as i64),
            other => other.to_string(),
        },
        'o' | 'O' => match arg {
            LogValue::Str(s) => format!("{s:?}"),
            other => other.to_string(),
        },
        _ => arg.to_string(),
    }
}

impl Appender for ConsoleAppender {
    fn trace(&self, args: &[LogValue]) {
        eprintln!("{}", Self::render(args));
    }

    fn debug(&self, args: &[LogValue]) {
        eprintln!("{}", Self::render(args));
    }

    fn info(&self, args: &[LogValue]) {
        println!("{}", Self::render(args));
    }

    fn warn(&self, args: &[LogValue]) {
        eprintln!("{}", Self::render(args));
    }

    fn error(&self, args: &[LogValue]) {
        eprintln!("{}", Self::render(args));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_args;

    #[test]
    fn test_render_empty_call() {
        assert_eq!(ConsoleAppender::render(&[]), "");
    }

    #[test]
    fn test_render_string_substitution() {
        let args = log_args!["hello %s!", "world"];
        assert_eq!(ConsoleAppender::render(&args), "hello world!");
    }

    #[test]
    fn test_render_integer_substitution() {
        let args = log_args!["%d of %i", 3, 10];
        assert_eq!(ConsoleAppender::render(&args), "3 of 10");
    }

    #[test]
    fn test_render_integer_substitution_truncates_floats() {
        let args = log_args!["%d", 1.9];
        assert_eq!(ConsoleAppender::render(&args), "1");
    }

    #[test]
    fn test_render_float_substitution() {
        let args = log_args!["%f", 1.25];
        assert_eq!(ConsoleAppender::render(&args), "1.25");
    }

    #[test]
    fn test_render_object_substitution_quotes_strings() {
        let args = log_args!["%o", "value"];
        assert_eq!(ConsoleAppender::render(&args), "\"value\"");
    }

    #[test]
    fn test_render_object_substitution_uses_object_rendering() {
        let args = [
            crate::LogValue::from("%O"),
            crate::LogValue::object(vec![1, 2]),
        ];
        assert_eq!(ConsoleAppender::render(&args), "[1, 2]");
    }

    #[test]
    fn test_render_percent_escape() {
        let args = log_args!["100%% done"];
        assert_eq!(ConsoleAppender::render(&args), "100% done");
    }

    #[test]
    fn test_render_keeps_unmatched_directives() {
        let args = log_args!["%s and %s", "one"];
        assert_eq!(ConsoleAppender::render(&args), "one and %s");
    }

    #[test]
    fn test_render_keeps_unknown_directives() {
        let args = log_args!["%q", "x"];
        assert_eq!(ConsoleAppender::render(&args), "%q x");
    }

    #[test]
    fn test_render_appends_surplus_arguments() {
        let args = log_args!["done:", 1, true];
        assert_eq!(ConsoleAppender::render(&args), "done: 1 true");
    }

    #[test]
    fn test_render_non_string_first_argument() {
        let args = log_args![42, "next"];
        assert_eq!(ConsoleAppender::render(&args), "42 next");
    }

    #[test]
    fn test_console_appender_logs() {
        // Just verifies none of the methods panic
        let appender = ConsoleAppender::new();
        appender.trace(&log_args!["trace message"]);
        appender.debug(&log_args!["debug message"]);
        appender.info(&log_args!["info message"]);
        appender.warn(&log_args!["warn message"]);
        appender.error(&log_args!["error message"]);
    }
}
