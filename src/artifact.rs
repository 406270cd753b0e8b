use crate::platform::{self, Host, PlatformId, UnsupportedPlatformError};

pub const TOOL_NAME: &str = "ramilang";
pub const RELEASE_BASE: &str = "https://github.com/ponbac/ramilang";

/// A resolved release archive, ready to be handed to an installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub name: String,
    pub url: String,
}

/// Resolve the host platform and build the descriptor for `tool_name` at `version`.
pub fn locate(
    host: &impl Host,
    tool_name: &str,
    version: &str,
) -> Result<ArtifactDescriptor, UnsupportedPlatformError> {
    locate_from(host, RELEASE_BASE, tool_name, version)
}

pub fn locate_from(
    host: &impl Host,
    release_base: &str,
    tool_name: &str,
    version: &str,
) -> Result<ArtifactDescriptor, UnsupportedPlatformError> {
    let platform = platform::resolve(host)?;
    let url = release_url_from(release_base, tool_name, version, platform);
    log::info!("located {tool_name} {version} for {platform}: {url}");

    Ok(ArtifactDescriptor {
        name: tool_name.to_string(),
        url,
    })
}

/// Download URL of the `tool_name` archive for `platform` on the default release host.
#[must_use]
pub fn release_url(tool_name: &str, version: &str, platform: PlatformId) -> String {
    release_url_from(RELEASE_BASE, tool_name, version, platform)
}

#[must_use]
pub fn release_url_from(
    release_base: &str,
    tool_name: &str,
    version: &str,
    platform: PlatformId,
) -> String {
    let base = release_base.trim_end_matches('/');
    format!("{base}/releases/download/v{version}/{tool_name}-{platform}.tar.gz")
}
