use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::{debug, info, warn, LevelFilter};
use quicklink::api::{self, CmdMessage, MessageLevel};
use quicklink::clipboard::{copy_to_clipboard, read_clipboard, read_selection};
use quicklink::commands;
use quicklink::config::{QuicklinkConfig, CONFIG_KEYS};
use quicklink::error::{QuicklinkError, Result};
use quicklink::model::ResolutionInputs;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
use args::{Cli, Commands};

const CONFIG_DIR_ENV: &str = "QUICKLINK_CONFIG_DIR";

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

struct AppContext {
    config: QuicklinkConfig,
    config_dir: Option<PathBuf>,
}

/// Returns whether the command succeeded.
fn run(cli: Cli) -> Result<bool> {
    let mut ctx = init_context()?;

    match cli.command {
        Commands::Process {
            template,
            args,
            clipboard,
            selection,
            at,
            copy,
            json,
        } => handle_process(
            &ctx,
            &template,
            ProcessOptions {
                args,
                clipboard,
                selection,
                at,
                copy,
                json,
            },
        ),
        Commands::Analyze { template, json } => handle_analyze(&template, json),
        Commands::Validate { template } => Ok(handle_validate(&template)),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context() -> Result<AppContext> {
    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "quicklink", "quicklink")
                .map(|dirs| dirs.config_dir().to_path_buf())
        });

    let config = match &config_dir {
        Some(dir) => QuicklinkConfig::load(dir)?,
        None => {
            warn!("Could not determine config dir, using defaults");
            QuicklinkConfig::default()
        }
    };

    Ok(AppContext { config, config_dir })
}

struct ProcessOptions {
    args: Vec<String>,
    clipboard: Option<String>,
    selection: Option<String>,
    at: Option<String>,
    copy: bool,
    json: bool,
}

fn handle_process(ctx: &AppContext, template: &str, opts: ProcessOptions) -> Result<bool> {
    let arguments = parse_arguments(&opts.args)?;
    let reference = parse_reference(opts.at.as_deref())?;

    // Only touch the system clipboard when the template asks for it.
    let needs = api::analyze(template);
    let clipboard = opts.clipboard.or_else(|| {
        if ctx.config.read_clipboard && needs.uses_clipboard {
            read_clipboard()
        } else {
            None
        }
    });
    let selection = opts.selection.or_else(|| {
        if ctx.config.read_clipboard && needs.uses_selection {
            read_selection()
        } else {
            None
        }
    });

    let inputs = ResolutionInputs::new(reference)
        .with_arguments(arguments)
        .with_clipboard(clipboard)
        .with_selection(selection)
        .with_styles(ctx.config.date_styles());
    let result = api::process_with(template, &inputs);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.url);
        eprint_messages(&commands::process::messages(&result));
    }

    if result.success && (opts.copy || ctx.config.copy_result) {
        match copy_to_clipboard(&result.url) {
            Ok(()) => info!("Copied result to clipboard"),
            Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
        }
    }

    Ok(result.success)
}

fn handle_analyze(template: &str, json: bool) -> Result<bool> {
    let info = api::analyze(template);
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        let messages = commands::analyze::messages(&info);
        if messages.is_empty() {
            println!("{}", "Template has no placeholders to fill.".dimmed());
        }
        print_messages(&messages);
    }
    Ok(true)
}

fn handle_validate(template: &str) -> bool {
    let result = api::validate_with_errors(template);
    print_messages(&commands::validate::messages(&result));
    result.is_valid
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            let dir = ctx.config_dir.clone().ok_or_else(|| {
                QuicklinkError::InvalidInput("No config directory available".to_string())
            })?;
            ctx.config.set(&key, &value)?;
            ctx.config.save(&dir)?;
            print_messages(&[CmdMessage::success(format!("{} set to {}", key, value))]);
        }
    }
    Ok(true)
}

fn parse_arguments(raw: &[String]) -> Result<HashMap<String, String>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    QuicklinkError::InvalidInput(format!(
                        "Argument must be NAME=VALUE, got: {}",
                        pair
                    ))
                })
        })
        .collect()
}

fn parse_reference(at: Option<&str>) -> Result<DateTime<FixedOffset>> {
    match at {
        Some(text) => DateTime::parse_from_rfc3339(text).map_err(|e| {
            QuicklinkError::InvalidInput(format!("Invalid --at time {}: {}", text, e))
        }),
        None => Ok(Local::now().fixed_offset()),
    }
}

fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.normal(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", styled(message));
    }
}
