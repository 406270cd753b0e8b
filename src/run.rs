use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Run the installed binary with inherited stdio and return its exit code.
///
/// A process terminated by a signal reports exit code 1.
pub fn run_binary<I, S>(binary_path: &Path, args: I) -> Result<i32, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if !binary_path.exists() {
        return Err(format!(
            "{} is not installed, run the install command first",
            binary_path.display()
        ));
    }

    log::debug!("running {}", binary_path.display());

    let status = Command::new(binary_path)
        .args(args)
        .status()
        .map_err(|e| format!("failed to start {}: {e}", binary_path.display()))?;

    Ok(status.code().unwrap_or(1))
}
