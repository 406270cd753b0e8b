use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default install location: `~/.ramilang/bin`.
pub fn default_install_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("could not determine home directory")?;
    Ok(home.join(".ramilang").join("bin"))
}

/// Path the executable for `tool_name` is installed at inside `install_dir`.
#[must_use]
pub fn binary_path(install_dir: &Path, tool_name: &str) -> PathBuf {
    if cfg!(target_os = "windows") {
        install_dir.join(format!("{tool_name}.exe"))
    } else {
        install_dir.join(tool_name)
    }
}

/// Write the binary bytes into `install_dir` and return the installed path.
pub fn install_binary(
    install_dir: &Path,
    tool_name: &str,
    binary_bytes: &[u8],
) -> Result<PathBuf, String> {
    fs::create_dir_all(install_dir)
        .map_err(|e| format!("failed to create {}: {e}", install_dir.display()))?;

    let binary_path = binary_path(install_dir, tool_name);

    fs::write(&binary_path, binary_bytes)
        .map_err(|e| format!("failed to write binary to {}: {e}", binary_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(&binary_path, perms)
            .map_err(|e| format!("failed to set permissions: {e}"))?;
    }

    log::info!("installed {}", binary_path.display());
    Ok(binary_path)
}

/// Remove an installed binary. Returns `false` if nothing was installed.
pub fn uninstall(install_dir: &Path, tool_name: &str) -> Result<bool, String> {
    let binary_path = binary_path(install_dir, tool_name);

    match fs::remove_file(&binary_path) {
        Ok(()) => {
            log::info!("removed {}", binary_path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(format!("failed to remove {}: {e}", binary_path.display())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn install_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("bin");

        let path = install_binary(&dir, "ramilang", b"binary").unwrap();
        assert_eq!(path, binary_path(&dir, "ramilang"));
        assert_eq!(fs::read(&path).unwrap(), b"binary");
    }

    #[test]
    fn install_overwrites_existing_binary() {
        let tmp = tempfile::tempdir().unwrap();
        install_binary(tmp.path(), "ramilang", b"old").unwrap();
        let path = install_binary(tmp.path(), "ramilang", b"new").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn install_sets_executable_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = install_binary(tmp.path(), "ramilang", b"binary").unwrap();
        let mode = fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn uninstall_removes_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let path = install_binary(tmp.path(), "ramilang", b"binary").unwrap();

        assert!(uninstall(tmp.path(), "ramilang").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn uninstall_nothing_installed() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!uninstall(tmp.path(), "ramilang").unwrap());
    }

    #[test]
    fn default_install_dir_is_under_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                default_install_dir().unwrap(),
                home.join(".ramilang").join("bin")
            );
        }
    }
}
