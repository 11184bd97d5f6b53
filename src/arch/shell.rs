use std::path::PathBuf;

use crate::arch::Platform;

pub const INTERPRETER_ENV: &str = "BOT_LAUNCHER_PYTHON";
pub const TERMINAL_ENV: &str = "BOT_LAUNCHER_TERMINAL";
pub const DEFAULT_TERMINAL: &str = "xterm";

/// Program plus leading args used to hand a command string to the OS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Command interpreter of the host the binary runs on.
pub fn host_shell() -> ShellCommand {
    match Platform::current() {
        Platform::Windows => ShellCommand::new("cmd", vec!["/C".to_string()]),
        Platform::Posix => ShellCommand::new("sh", vec!["-c".to_string()]),
    }
}

fn find_in_path(program: &str) -> Option<String> {
    which::which(program)
        .ok()
        .map(|p: PathBuf| p.to_string_lossy().to_string())
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Python interpreter that runs the bot script.
pub fn interpreter_program(explicit: Option<&str>, platform: Platform) -> String {
    pick_interpreter(explicit, env_override(INTERPRETER_ENV), platform, find_in_path)
}

/// Terminal emulator for POSIX launches.
pub fn terminal_program(explicit: Option<&str>) -> String {
    pick_terminal(explicit, env_override(TERMINAL_ENV), find_in_path)
}

fn pick_interpreter(
    explicit: Option<&str>,
    from_env: Option<String>,
    platform: Platform,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    if let Some(p) = explicit.filter(|p| !p.trim().is_empty()) {
        return p.to_string();
    }
    if let Some(p) = from_env {
        return p;
    }
    for candidate in ["python3", "python"] {
        if let Some(p) = lookup(candidate) {
            return p;
        }
    }
    // Last resort: program name and hope the terminal's PATH has it.
    match platform {
        Platform::Windows => "python".to_string(),
        Platform::Posix => "python3".to_string(),
    }
}

fn pick_terminal(
    explicit: Option<&str>,
    from_env: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    if let Some(p) = explicit.filter(|p| !p.trim().is_empty()) {
        return p.to_string();
    }
    if let Some(p) = from_env {
        return p;
    }
    lookup(DEFAULT_TERMINAL).unwrap_or_else(|| DEFAULT_TERMINAL.to_string())
}
