//! # Command Layer
//!
//! Pure logic for the three template operations. Each module exposes a `run`
//! that takes plain Rust values and returns plain Rust values, plus a
//! `messages` helper that turns the result into user-facing [`CmdMessage`]s
//! for whichever UI is printing them.
//!
//! - [`process`]: substitute placeholders
//! - [`analyze`]: describe what a template needs
//! - [`validate`]: report syntax problems

pub mod analyze;
pub mod process;
pub mod validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}
