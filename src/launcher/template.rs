use crate::arch::Platform;
use crate::config::LaunchPlan;
use crate::credentials::Credentials;

/// How one bot invocation is wrapped so it opens in its own window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandTemplate {
    /// `start cmd /k "<invocation>"`
    WindowsConsole,
    /// `<terminal> -e "<invocation>; bash" &`
    PosixTerminal { terminal: String },
}

impl CommandTemplate {
    pub fn for_plan(plan: &LaunchPlan) -> Self {
        match plan.platform {
            Platform::Windows => CommandTemplate::WindowsConsole,
            Platform::Posix => CommandTemplate::PosixTerminal {
                terminal: plan
                    .terminal
                    .clone()
                    .unwrap_or_else(|| crate::arch::shell::DEFAULT_TERMINAL.to_string()),
            },
        }
    }

    pub fn render(&self, invocation: &str) -> String {
        match self {
            CommandTemplate::WindowsConsole => format!("start cmd /k \"{invocation}\""),
            // `; bash` keeps the window open once the bot exits.
            CommandTemplate::PosixTerminal { terminal } => {
                format!("{terminal} -e \"{invocation}; bash\" &")
            }
        }
    }
}

/// The exact argument shape each bot process receives.
pub fn invocation(interpreter: &str, script: &str, creds: &Credentials) -> String {
    format!(
        "{interpreter} {script} --email={} --password={}",
        creds.email, creds.password
    )
}
