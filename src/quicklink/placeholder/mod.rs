//! # Placeholder Grammar
//!
//! Everything that turns template text into typed placeholders:
//!
//! - [`scanner`]: finds `{...}` spans
//! - [`grammar`]: splits off modifiers and parses the base expression
//! - [`attributes`]: `key="value"` / `key=value` extraction
//! - [`options`]: `options="Label|value, other"` lists
//!
//! ```text
//! {argument name="q" default="rust" | trim | percent-encode}
//!  └──────────── base ────────────┘   └──── modifiers ────┘
//! ```

pub mod attributes;
pub mod grammar;
pub mod options;
pub mod scanner;

pub use attributes::extract;
pub use grammar::parse;
pub use options::parse_options;
pub use scanner::scan;
