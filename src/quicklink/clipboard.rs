//! System clipboard and selection access for the CLI.
//!
//! The template core never calls into this module: the binary reads these
//! values up front and hands them over as plain strings. A missing tool or an
//! empty clipboard yields `None`, which leaves `{clipboard}` untouched.
//!
//! - macOS: pbpaste / pbcopy (no selection support)
//! - Linux: xclip, falling back to xsel; the selection is the PRIMARY buffer
//! - Windows: PowerShell Get-Clipboard / clip.exe (no selection support)

use crate::error::{QuicklinkError, Result};
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use log::debug;
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use std::process::Command;

/// Current clipboard text, if it can be read.
pub fn read_clipboard() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        read_command("pbpaste", &[])
    }

    #[cfg(target_os = "linux")]
    {
        read_command("xclip", &["-selection", "clipboard", "-o"])
            .or_else(|| read_command("xsel", &["--clipboard", "--output"]))
    }

    #[cfg(target_os = "windows")]
    {
        read_command("powershell", &["-NoProfile", "-Command", "Get-Clipboard"])
            .map(|text| text.strip_suffix("\r\n").map(str::to_string).unwrap_or(text))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Currently selected text, where the platform exposes it without
/// accessibility permissions.
pub fn read_selection() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        read_command("xclip", &["-selection", "primary", "-o"])
            .or_else(|| read_command("xsel", &["--primary", "--output"]))
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn read_command(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout).ok(),
        Ok(output) => {
            debug!(program, status = output.status.to_string(); "Clipboard read failed");
            None
        }
        Err(e) => {
            debug!(program, error = e.to_string(); "Clipboard tool unavailable");
            None
        }
    }
}

/// Copies text to the system clipboard in an OS-specific way.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(Command::new("pbcopy"), "pbcopy", text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        pipe_to(xclip, "xclip", text).or_else(|_| {
            let mut xsel = Command::new("xsel");
            xsel.args(["--clipboard", "--input"]);
            pipe_to(xsel, "xsel", text).map_err(|e| {
                QuicklinkError::Clipboard(format!("{}. Install xclip or xsel.", e))
            })
        })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(Command::new("clip"), "clip", text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(QuicklinkError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: Command, name: &str, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| QuicklinkError::Clipboard(format!("Failed to spawn {}: {}", name, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| QuicklinkError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| QuicklinkError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(QuicklinkError::Clipboard(format!("{} exited with error", name)))
    }
}
