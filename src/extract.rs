use std::io::{Cursor, Read};

/// Pull the `tool_name` executable out of a `.tar.gz` release archive.
///
/// The entry may sit at any depth and may carry an `.exe` suffix.
pub fn extract_binary(archive_bytes: &[u8], tool_name: &str) -> Result<Vec<u8>, String> {
    let exe_name = format!("{tool_name}.exe");
    let decoder = flate2::read::GzDecoder::new(Cursor::new(archive_bytes));
    let mut archive = tar::Archive::new(decoder);

    for entry in archive
        .entries()
        .map_err(|e| format!("failed to read tar entries: {e}"))?
    {
        let mut entry = entry.map_err(|e| format!("failed to read tar entry: {e}"))?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let path = entry
            .path()
            .map_err(|e| format!("failed to read entry path: {e}"))?;
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if file_name == tool_name || file_name == exe_name {
            log::debug!("found {} in archive", path.display());
            let mut buf = Vec::new();
            entry
                .read_to_end(&mut buf)
                .map_err(|e| format!("failed to read binary from archive: {e}"))?;
            return Ok(buf);
        }
    }

    Err(format!("{tool_name} binary not found in tar.gz archive"))
}
