//! Diagram source encoding and render lifecycle for PlantUML viewers.
//!
//! Turns diagram source text into the compact URL-safe token the PlantUML
//! server consumes, builds the image request URL, and tracks per-view
//! render state across overlapping requests.
//!
//! Provides:
//! - `compress`: raw-deflate compression of diagram source text
//! - `token`: URL-safe token encoding of the compressed bytes
//! - `request`: render server URL construction
//! - `lifecycle`: per-view render state machine with stale-result discard
//! - `http`: blocking image fetcher backed by ureq
//! - `config`: render service connection settings
//! - `handoff`: immutable conversion results passed from upload to viewing

pub mod compress;
pub mod config;
pub mod handoff;
pub mod http;
pub mod lifecycle;
pub mod request;
pub mod token;

pub use compress::CompressError;
pub use config::{ImageFormat, RenderServiceConfig};
pub use handoff::{DiagramKind, DiagramSet, SourceFile};
pub use http::HttpImageFetcher;
pub use lifecycle::{FetchError, ImageFetcher, PendingFetch, RenderLifecycle, RenderState};
pub use request::RenderServer;
