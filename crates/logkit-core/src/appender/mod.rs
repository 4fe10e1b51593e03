//! Appender abstractions and bundled sinks

mod traits;
mod console;
mod noop;
mod memory;
mod custom;

pub use traits::{Appender, AppenderError, AppenderResult, BoxedAppender, SharedAppender};
pub use console::ConsoleAppender;
pub use noop::NoOpAppender;
pub use memory::{CapturedCall, MemoryAppender};
pub use custom::{CustomAppender, CustomAppenderBuilder, LevelHandler};
