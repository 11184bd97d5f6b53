use std::path::{Path, PathBuf};

pub const DEFAULT_SCRIPT: &str = "bot.py";

/// Bot script location relative to the launcher's working directory.
///
/// Absolute paths are taken as-is; `None` means `<cwd>/bot.py`.
pub fn script_path(cwd: &Path, script: Option<&Path>) -> PathBuf {
    match script {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd.join(DEFAULT_SCRIPT),
    }
}
