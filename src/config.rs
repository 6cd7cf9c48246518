//! Render service connection settings.

use serde::{Deserialize, Serialize};

fn default_server_url() -> String {
    "https://www.plantuml.com/plantuml".to_string()
}

/// Image representation requested from the render server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Scalable vector output.
    #[default]
    Svg,
    /// Raster output.
    Png,
}

impl ImageFormat {
    /// URL path segment selecting this format on the server.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Connection settings for the external render server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderServiceConfig {
    /// Render server root URL, without a trailing slash.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Image format requested from the server.
    #[serde(default)]
    pub format: ImageFormat,
}

impl Default for RenderServiceConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            format: ImageFormat::default(),
        }
    }
}
