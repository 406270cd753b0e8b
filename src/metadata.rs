use std::fs;
use std::path::Path;

/// Read the `version` field from a `package.json`-style manifest.
pub fn read_version(manifest: &Path) -> Result<String, String> {
    let text = fs::read_to_string(manifest)
        .map_err(|e| format!("failed to read {}: {e}", manifest.display()))?;
    parse_version(&text).map_err(|e| format!("{}: {e}", manifest.display()))
}

fn parse_version(text: &str) -> Result<String, String> {
    let body: serde_json::Value =
        serde_json::from_str(text).map_err(|e| format!("failed to parse manifest JSON: {e}"))?;

    let version = body["version"]
        .as_str()
        .ok_or("manifest has no string \"version\" field")?;

    if version.is_empty() {
        return Err("manifest \"version\" field is empty".to_string());
    }

    Ok(version.to_string())
}

/// Version this installer was published with.
#[must_use]
pub const fn bundled_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
