use crate::commands::CmdMessage;
use crate::model::{ArgumentInfo, PlaceholderKind, TemplateInfo};
use crate::placeholder::{parse, scan};

/// Summarizes what a template needs without resolving anything.
///
/// Arguments are de-duplicated by name (the first declaration wins); date
/// formats are collected as they appear, duplicates included. Placeholders
/// that fail to parse are skipped.
pub fn run(template: &str) -> TemplateInfo {
    let mut info = TemplateInfo::default();

    for span in scan(template) {
        let Ok(parsed) = parse(&span.content) else {
            continue;
        };

        match parsed.kind {
            PlaceholderKind::Argument {
                name,
                default,
                options,
            } => {
                if !info.arguments.iter().any(|arg| arg.name == name) {
                    info.arguments.push(ArgumentInfo {
                        required: default.is_none(),
                        name,
                        default,
                        options,
                    });
                }
            }
            PlaceholderKind::Clipboard => info.uses_clipboard = true,
            PlaceholderKind::Selection => info.uses_selection = true,
            PlaceholderKind::Date(spec)
            | PlaceholderKind::Time(spec)
            | PlaceholderKind::DateTime(spec) => {
                info.uses_date = true;
                if let Some(format) = spec.format {
                    info.date_formats.push(format);
                }
            }
            PlaceholderKind::Unknown { .. } => {}
        }
    }

    info
}

/// One line per argument and input the template depends on.
pub fn messages(info: &TemplateInfo) -> Vec<CmdMessage> {
    let mut messages = Vec::new();

    for arg in &info.arguments {
        let mut line = if arg.required {
            format!("argument {} (required)", arg.name)
        } else {
            format!("argument {} (default: {:?})", arg.name, arg.default.as_deref().unwrap_or(""))
        };
        if let Some(options) = &arg.options {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            line.push_str(&format!(" options: {}", values.join(", ")));
        }
        messages.push(CmdMessage::info(line));
    }
    if info.uses_clipboard {
        messages.push(CmdMessage::info("uses clipboard"));
    }
    if info.uses_selection {
        messages.push(CmdMessage::info("uses selection"));
    }
    if info.uses_date {
        messages.push(CmdMessage::info("uses date"));
    }
    for format in &info.date_formats {
        messages.push(CmdMessage::info(format!("date format: {}", format)));
    }

    messages
}
