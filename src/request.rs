//! Render server URL construction.

use crate::compress::{self, CompressError};
use crate::config::{ImageFormat, RenderServiceConfig};
use crate::token;

/// Builds image request URLs for a configured render server.
#[derive(Debug, Clone)]
pub struct RenderServer {
    server_url: String,
    format: ImageFormat,
}

impl RenderServer {
    /// Create a builder from connection settings.
    pub fn new(config: &RenderServiceConfig) -> Self {
        Self {
            server_url: config.server_url.clone(),
            format: config.format,
        }
    }

    /// URL for an already-encoded token.
    ///
    /// Plain concatenation: every token symbol is URL-safe by construction,
    /// so no escaping is applied. Long diagrams produce proportionally long
    /// URLs.
    pub fn token_url(&self, token: &str) -> String {
        format!("{}/{}/{}", self.server_url, self.format.path_segment(), token)
    }

    /// Compress and encode diagram source, then build its image URL.
    pub fn source_url(&self, source: &str) -> Result<String, CompressError> {
        let compressed = compress::compress(source)?;
        Ok(self.token_url(&token::encode(&compressed)))
    }
}

impl Default for RenderServer {
    fn default() -> Self {
        Self::new(&RenderServiceConfig::default())
    }
}
