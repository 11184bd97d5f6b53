//! Opens one terminal window per trading bot, each logged in with its own
//! synthetic local-dev account.

pub mod arch;
pub mod config;
pub mod credentials;
pub mod launcher;

use std::sync::Arc;

use crate::config::{ConfigError, LaunchConfig};
use crate::launcher::submitter::{CommandSubmitter, DryRunSubmitter, ShellSubmitter};
use crate::launcher::{LaunchReport, Launcher};

/// Resolve `config` against the current directory and launch every bot.
///
/// With `dry_run` the commands are rendered and reported but never handed
/// to the OS.
pub fn run(config: &LaunchConfig, dry_run: bool) -> Result<LaunchReport, ConfigError> {
    let plan = config.resolve_in_current_dir()?;
    let submitter: Arc<dyn CommandSubmitter> = if dry_run {
        Arc::new(DryRunSubmitter)
    } else {
        Arc::new(ShellSubmitter::new())
    };
    Ok(Launcher::new(plan, submitter).launch())
}
