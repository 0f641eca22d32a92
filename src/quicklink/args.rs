use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quicklink", version)]
#[command(about = "Expand URL templates with arguments, clipboard text and dates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a template into a URL
    #[command(alias = "p")]
    Process {
        /// The template, e.g. 'https://x.com?q={argument name="q" | percent-encode}'
        template: String,

        /// Argument value as NAME=VALUE (repeatable)
        #[arg(short, long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Text to use for {clipboard} instead of the system clipboard
        #[arg(long)]
        clipboard: Option<String>,

        /// Text to use for {selection} instead of the system selection
        #[arg(long)]
        selection: Option<String>,

        /// Reference time as RFC 3339 (defaults to now)
        #[arg(long, value_name = "RFC3339")]
        at: Option<String>,

        /// Copy the resulting URL to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the arguments and inputs a template needs
    #[command(alias = "a")]
    Analyze {
        template: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a template for syntax errors
    #[command(alias = "v")]
    Validate { template: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
