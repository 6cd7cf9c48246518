//! Blocking image fetcher backed by ureq with native-tls.

use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

use crate::lifecycle::{FetchError, ImageFetcher};

/// Global timeout for image requests.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum accepted image response size (10 MB).
pub const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// Reject render URLs that are not plain web URLs.
///
/// The server root is user-configurable, so the scheme is checked before
/// any request goes out; the host, path, and token are used as-is.
pub fn validate_render_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| FetchError::InvalidUrl(format!("invalid URL '{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(FetchError::InvalidUrl(format!(
            "URL scheme '{scheme}' rejected; only http and https are allowed"
        ))),
    }
}

/// Create a new HTTP agent configured with native-tls and a global timeout.
///
/// Native-tls uses the system TLS library (Schannel on Windows, OpenSSL on
/// Linux, Security.framework on macOS) with the platform root certificates.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

/// Fetches rendered images over HTTP.
pub struct HttpImageFetcher {
    agent: Agent,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self { agent: agent() }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpImageFetcher {
    /// Fetch the rendered image at `url`.
    ///
    /// Error statuses, transport failures, and oversized or empty bodies
    /// all surface as [`FetchError`]; the response body is never parsed.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        validate_render_url(url)?;

        let bytes = self
            .agent
            .get(url)
            .header("User-Agent", "plantuml-render")
            .call()
            .map_err(|e| FetchError::Request(e.to_string()))?
            .into_body()
            .with_config()
            .limit(MAX_IMAGE_SIZE)
            .read_to_vec()
            .map_err(|e| FetchError::Body(e.to_string()))?;

        if bytes.is_empty() {
            return Err(FetchError::EmptyImage);
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_render_url("https://www.plantuml.com/plantuml/svg/0m00").is_ok());
        assert!(validate_render_url("http://localhost:8080/plantuml/svg/0m00").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        let result = validate_render_url("file:///etc/passwd");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("file"), "error should name the bad scheme: {msg}");

        assert!(validate_render_url("ftp://example.com/diagram").is_err());
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(validate_render_url("not a url at all").is_err());
    }
}
