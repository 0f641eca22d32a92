//! # API Facade
//!
//! The single entry point for template operations, whatever UI is calling.
//! Every function here is a thin dispatch to the command layer:
//!
//! - [`process`] / [`process_with`]: substitute placeholders
//! - [`analyze`]: list the arguments and inputs a template needs
//! - [`validate`] / [`validate_with_errors`]: syntax checks
//!
//! Nothing in this layer reads the clipboard, the selection or the clock.
//! Callers obtain those values themselves and pass them in, which keeps every
//! call a pure function of its arguments.

use crate::commands;
use crate::model::{ProcessOutcome, ProcessResult, ResolutionInputs, TemplateInfo, ValidationResult};
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// Expands `template` with the default date styles.
pub fn process(
    template: &str,
    arguments: HashMap<String, String>,
    clipboard: Option<String>,
    selection: Option<String>,
    reference: DateTime<FixedOffset>,
) -> ProcessResult {
    let inputs = ResolutionInputs::new(reference)
        .with_arguments(arguments)
        .with_clipboard(clipboard)
        .with_selection(selection);
    process_with(template, &inputs)
}

pub fn process_with(template: &str, inputs: &ResolutionInputs) -> ProcessResult {
    commands::process::run(template, inputs)
}

/// Resolves the text between one placeholder's braces.
pub fn resolve_placeholder(content: &str, inputs: &ResolutionInputs) -> ProcessOutcome {
    commands::process::resolve_placeholder(content, inputs)
}

pub fn analyze(template: &str) -> TemplateInfo {
    commands::analyze::run(template)
}

pub fn validate(template: &str) -> bool {
    validate_with_errors(template).is_valid
}

pub fn validate_with_errors(template: &str) -> ValidationResult {
    commands::validate::run(template)
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::model::{ArgumentInfo, DateStyles, OptionItem};
