use reqwest::blocking::Client;

const USER_AGENT: &str = "ramilang-installer";

/// Download the release archive at `url`.
pub fn fetch_archive(client: &Client, url: &str) -> Result<Vec<u8>, String> {
    log::debug!("downloading {url}");

    let resp = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|e| format!("failed to download {url}: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("server returned {} for {url}", resp.status()));
    }

    let bytes = resp
        .bytes()
        .map_err(|e| format!("failed to read archive body: {e}"))?
        .to_vec();

    log::debug!("downloaded {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn fetch_archive_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/archive.tar.gz")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("archive-bytes")
            .create();

        let client = Client::new();
        let bytes = fetch_archive(&client, &format!("{}/archive.tar.gz", server.url())).unwrap();
        assert_eq!(bytes, b"archive-bytes");
        mock.assert();
    }

    #[test]
    fn fetch_archive_not_found() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/missing.tar.gz")
            .with_status(404)
            .create();

        let client = Client::new();
        let err = fetch_archive(&client, &format!("{}/missing.tar.gz", server.url())).unwrap_err();
        assert!(err.contains("server returned 404"));
        mock.assert();
    }
}
