use std::process::{Command, Stdio};

use thiserror::Error;
use uuid::Uuid;

use crate::arch::shell::{self, ShellCommand};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// What a submitter hands back for one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchHandle {
    pub id: Uuid,
    /// Pid of the shell that ran the command; `None` when nothing was spawned.
    pub pid: Option<u32>,
}

impl LaunchHandle {
    pub fn new(pid: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pid,
        }
    }
}

pub trait CommandSubmitter: Send + Sync {
    /// Hand `command` to the OS. Must not wait for the command to finish.
    fn submit(&self, command: &str) -> Result<LaunchHandle, SubmitError>;
}

/// Runs command strings through the host shell and forgets about them.
pub struct ShellSubmitter {
    shell: ShellCommand,
}

impl ShellSubmitter {
    pub fn new() -> Self {
        Self {
            shell: shell::host_shell(),
        }
    }

    fn command(&self, line: &str) -> Command {
        let mut cmd = Command::new(&self.shell.program);
        cmd.args(&self.shell.args);
        // cmd.exe does its own quote parsing; escaping the line would break `start`.
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.raw_arg(line);
        }
        #[cfg(not(windows))]
        cmd.arg(line);
        // The backgrounded terminal outlives us; it must not hold our stdio open.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Default for ShellSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSubmitter for ShellSubmitter {
    fn submit(&self, command: &str) -> Result<LaunchHandle, SubmitError> {
        let child = self
            .command(command)
            .spawn()
            .map_err(|source| SubmitError::Spawn {
                command: command.to_string(),
                source,
            })?;
        // Not waited on: the short-lived shell stays a zombie until this
        // process exits, which is fine for a one-shot launch.
        Ok(LaunchHandle::new(Some(child.id())))
    }
}

/// Accepts every command without running anything.
#[derive(Default)]
pub struct DryRunSubmitter;

impl CommandSubmitter for DryRunSubmitter {
    fn submit(&self, command: &str) -> Result<LaunchHandle, SubmitError> {
        tracing::debug!(command, "dry run, not submitted");
        Ok(LaunchHandle::new(None))
    }
}
