mod artifact;
mod download;
mod extract;
mod install;
mod metadata;
mod platform;
mod run;

use std::path::{Path, PathBuf};

use reqwest::blocking::Client;

pub use artifact::{
    locate, locate_from, release_url, release_url_from, ArtifactDescriptor, RELEASE_BASE,
    TOOL_NAME,
};
pub use install::{binary_path, default_install_dir};
pub use metadata::{bundled_version, read_version};
pub use platform::{resolve, Host, PlatformId, SystemHost, UnsupportedPlatformError};

#[derive(Debug, thiserror::Error)]
pub enum InstallerError {
    #[error(transparent)]
    Platform(#[from] UnsupportedPlatformError),

    #[error("reading package metadata failed: {0}")]
    Metadata(String),

    #[error("download failed: {0}")]
    Download(String),

    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("installation failed: {0}")]
    Installation(String),

    #[error("running binary failed: {0}")]
    Run(String),
}

/// Where releases come from and where the binary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub tool_name: String,
    pub release_base: String,
    pub install_dir: PathBuf,
}

impl InstallConfig {
    /// Config for the published `ramilang` releases, installed to `~/.ramilang/bin`.
    pub fn new() -> Result<Self, InstallerError> {
        Ok(Self::with_install_dir(
            default_install_dir().map_err(InstallerError::Installation)?,
        ))
    }

    #[must_use]
    pub fn with_install_dir(install_dir: PathBuf) -> Self {
        Self {
            tool_name: TOOL_NAME.to_string(),
            release_base: RELEASE_BASE.to_string(),
            install_dir,
        }
    }

    #[must_use]
    pub fn binary_path(&self) -> PathBuf {
        binary_path(&self.install_dir, &self.tool_name)
    }
}

/// Fetches an artifact and places its executable somewhere runnable.
pub trait Installer {
    fn install(&self, artifact: &ArtifactDescriptor) -> Result<PathBuf, InstallerError>;
}

/// Downloads the `.tar.gz` release archive over HTTP and unpacks the binary
/// into a directory.
pub struct BinaryInstaller {
    client: Client,
    install_dir: PathBuf,
}

impl BinaryInstaller {
    #[must_use]
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: Client::new(),
            install_dir: install_dir.into(),
        }
    }
}

impl Installer for BinaryInstaller {
    fn install(&self, artifact: &ArtifactDescriptor) -> Result<PathBuf, InstallerError> {
        let archive = download::fetch_archive(&self.client, &artifact.url)
            .map_err(InstallerError::Download)?;

        let binary_bytes = extract::extract_binary(&archive, &artifact.name)
            .map_err(InstallerError::Extraction)?;

        install::install_binary(&self.install_dir, &artifact.name, &binary_bytes)
            .map_err(InstallerError::Installation)
    }
}

/// Resolve the artifact for this host and hand it to `installer`.
///
/// An unsupported host fails before the installer is touched.
pub fn install_with(
    host: &impl Host,
    installer: &impl Installer,
    config: &InstallConfig,
    version: &str,
) -> Result<PathBuf, InstallerError> {
    let artifact = locate_from(host, &config.release_base, &config.tool_name, version)?;
    installer.install(&artifact)
}

/// Download and install `ramilang` at `version` for the current machine.
///
/// Returns the path to the installed binary.
pub fn install(config: &InstallConfig, version: &str) -> Result<PathBuf, InstallerError> {
    let installer = BinaryInstaller::new(&config.install_dir);
    install_with(&SystemHost, &installer, config, version)
}

/// Version to install, from `manifest` if given, otherwise this crate's own version.
pub fn resolve_version(manifest: Option<&Path>) -> Result<String, InstallerError> {
    manifest.map_or_else(
        || Ok(bundled_version().to_string()),
        |path| read_version(path).map_err(InstallerError::Metadata),
    )
}

/// Run the installed binary, returning its exit code.
pub fn run<I, S>(config: &InstallConfig, args: I) -> Result<i32, InstallerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run::run_binary(&config.binary_path(), args).map_err(InstallerError::Run)
}

/// Remove the installed binary. Returns `false` if it was not installed.
pub fn uninstall(config: &InstallConfig) -> Result<bool, InstallerError> {
    install::uninstall(&config.install_dir, &config.tool_name)
        .map_err(InstallerError::Installation)
}
