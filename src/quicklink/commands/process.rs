use crate::commands::CmdMessage;
use crate::date;
use crate::model::{PlaceholderKind, ProcessOutcome, ProcessResult, ResolutionInputs};
use crate::modifiers;
use crate::placeholder::{parse, scan};
use log::debug;

/// Expands every placeholder in `template` against `inputs`.
///
/// The output is assembled front to back from the literal text between spans,
/// so each placeholder is resolved from its own original text. Placeholders
/// that cannot be resolved are copied through unchanged.
pub fn run(template: &str, inputs: &ResolutionInputs) -> ProcessResult {
    let mut url = String::with_capacity(template.len());
    let mut missing_arguments = Vec::new();
    let mut errors = Vec::new();
    let mut cursor = 0;

    for span in scan(template) {
        url.push_str(&template[cursor..span.start]);
        let original = &template[span.start..span.end];

        match resolve_placeholder(&span.content, inputs) {
            ProcessOutcome::Resolved(value) => url.push_str(&value),
            ProcessOutcome::Passthrough => url.push_str(original),
            ProcessOutcome::MissingArgument(name) => {
                missing_arguments.push(name);
                url.push_str(original);
            }
            ProcessOutcome::Error(message) => {
                errors.push(message);
                url.push_str(original);
            }
        }

        cursor = span.end;
    }
    url.push_str(&template[cursor..]);

    let success = missing_arguments.is_empty() && errors.is_empty();
    debug!(success, missing = missing_arguments.len(), errors = errors.len(); "Processed template");

    ProcessResult {
        url,
        missing_arguments,
        errors,
        success,
    }
}

/// Resolves the content of a single placeholder (the text between braces).
pub fn resolve_placeholder(content: &str, inputs: &ResolutionInputs) -> ProcessOutcome {
    let parsed = match parse(content) {
        Ok(parsed) => parsed,
        Err(e) => return ProcessOutcome::Error(e.to_string()),
    };

    let base = match &parsed.kind {
        PlaceholderKind::Argument { name, default, .. } => {
            match inputs.arguments.get(name).or(default.as_ref()) {
                Some(value) => value.clone(),
                None => return ProcessOutcome::MissingArgument(name.clone()),
            }
        }
        PlaceholderKind::Clipboard => match &inputs.clipboard {
            Some(text) => text.clone(),
            None => return ProcessOutcome::Passthrough,
        },
        PlaceholderKind::Selection => match &inputs.selection {
            Some(text) => text.clone(),
            None => return ProcessOutcome::Passthrough,
        },
        PlaceholderKind::Date(spec) => date::render(spec, &inputs.styles.date, inputs.reference),
        PlaceholderKind::Time(spec) => date::render(spec, &inputs.styles.time, inputs.reference),
        PlaceholderKind::DateTime(spec) => {
            date::render(spec, &inputs.styles.datetime, inputs.reference)
        }
        PlaceholderKind::Unknown { .. } => return ProcessOutcome::Passthrough,
    };

    ProcessOutcome::Resolved(modifiers::apply(&base, &parsed.modifiers))
}

/// User-facing messages describing an unsuccessful result.
pub fn messages(result: &ProcessResult) -> Vec<CmdMessage> {
    let mut messages: Vec<CmdMessage> = result
        .missing_arguments
        .iter()
        .map(|name| CmdMessage::warning(format!("Missing argument: {}", name)))
        .collect();
    messages.extend(result.errors.iter().map(|e| CmdMessage::error(e.clone())));
    messages
}
