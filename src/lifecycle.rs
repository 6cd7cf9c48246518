//! Per-view render state machine.
//!
//! One [`RenderLifecycle`] instance belongs to one diagram view. The host
//! calls [`RenderLifecycle::set_source`] whenever the viewed diagram
//! changes and delivers fetch outcomes through
//! [`RenderLifecycle::complete`]; both must come from the same logical
//! thread of control. Every `set_source` call starts a new generation, and
//! completions carrying an older generation are dropped, so a slow
//! response for a superseded diagram can never overwrite newer state.

use crate::request::RenderServer;

/// The render server did not return a usable image.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// The request URL was rejected before any network activity.
    #[error("render request rejected: {0}")]
    InvalidUrl(String),
    /// The HTTP request failed (transport error or error status).
    #[error("render request failed: {0}")]
    Request(String),
    /// The response body could not be read in full.
    #[error("failed to read image body: {0}")]
    Body(String),
    /// The server returned a success status with no body.
    #[error("render server returned an empty image")]
    EmptyImage,
}

/// Fetches the rendered image for a request URL.
///
/// Implementations must be `Send + Sync` so hosts may run fetches on
/// worker threads and post completions back to the owning view.
pub trait ImageFetcher: Send + Sync {
    /// Fetch the image at `url`, returning its raw bytes.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Observable state of one diagram view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// No diagram source supplied; nothing to render and nothing to report.
    Empty,
    /// A request URL was built and the image transfer is in flight.
    Loading,
    /// The image for the latest source arrived.
    Loaded(Vec<u8>),
    /// Encoding or the image transfer failed; show the source text instead.
    Failed,
}

/// An image request issued for a specific generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    /// Fully built image request URL.
    pub url: String,
    /// Generation this request belongs to; pass back to
    /// [`RenderLifecycle::complete`] with the outcome.
    pub generation: u64,
}

/// Owns the full life of render attempts for one diagram view.
pub struct RenderLifecycle {
    server: RenderServer,
    state: RenderState,
    source: Option<String>,
    generation: u64,
}

impl RenderLifecycle {
    /// Create a controller in the [`RenderState::Empty`] state.
    pub fn new(server: RenderServer) -> Self {
        Self {
            server,
            state: RenderState::Empty,
            source: None,
            generation: 0,
        }
    }

    /// Supply new diagram source, starting a new generation.
    ///
    /// Absent source moves straight to [`RenderState::Empty`] and issues no
    /// request. Otherwise the source is encoded into a request URL: on
    /// success the state becomes [`RenderState::Loading`] and the returned
    /// [`PendingFetch`] must be issued by the host; on encode failure the
    /// state becomes [`RenderState::Failed`] with the source kept for
    /// fallback display.
    pub fn set_source(&mut self, source: Option<String>) -> Option<PendingFetch> {
        self.generation += 1;
        self.source = source;

        let Some(text) = self.source.as_deref() else {
            self.state = RenderState::Empty;
            return None;
        };

        match self.server.source_url(text) {
            Ok(url) => {
                self.state = RenderState::Loading;
                Some(PendingFetch {
                    url,
                    generation: self.generation,
                })
            }
            Err(e) => {
                log::warn!("diagram encode failed: {e}");
                self.state = RenderState::Failed;
                None
            }
        }
    }

    /// Deliver the outcome of an issued fetch.
    ///
    /// Outcomes from superseded generations are discarded without touching
    /// state; the transfer itself is never aborted at the transport level,
    /// its result is simply dropped here.
    pub fn complete(&mut self, generation: u64, outcome: Result<Vec<u8>, FetchError>) {
        if generation != self.generation {
            log::debug!(
                "discarding stale render completion (generation {generation}, current {})",
                self.generation
            );
            return;
        }
        match outcome {
            Ok(image) => self.state = RenderState::Loaded(image),
            Err(e) => {
                log::warn!("diagram fetch failed: {e}");
                self.state = RenderState::Failed;
            }
        }
    }

    /// Drive one full render attempt synchronously.
    ///
    /// Equivalent to [`set_source`](Self::set_source) followed by the fetch
    /// and [`complete`](Self::complete); useful for hosts without a
    /// background fetch loop.
    pub fn refresh(&mut self, source: Option<String>, fetcher: &dyn ImageFetcher) {
        if let Some(pending) = self.set_source(source) {
            let outcome = fetcher.fetch(&pending.url);
            self.complete(pending.generation, outcome);
        }
    }

    /// Current observable state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Source text of the latest input, shown verbatim when rendering
    /// cannot be completed.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Rendered image bytes, once the latest fetch has completed.
    pub fn image(&self) -> Option<&[u8]> {
        match &self.state {
            RenderState::Loaded(bytes) => Some(bytes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller_starts_empty() {
        let view = RenderLifecycle::new(RenderServer::default());
        assert_eq!(view.state(), &RenderState::Empty);
        assert_eq!(view.source(), None);
        assert_eq!(view.image(), None);
    }

    #[test]
    fn test_absent_source_is_empty_not_failed() {
        let mut view = RenderLifecycle::new(RenderServer::default());
        let pending = view.set_source(None);
        assert!(pending.is_none(), "absent source must not issue a request");
        assert_eq!(view.state(), &RenderState::Empty);
    }

    #[test]
    fn test_empty_string_source_still_loads() {
        // Empty text is valid input, distinct from absent input.
        let mut view = RenderLifecycle::new(RenderServer::default());
        let pending = view.set_source(Some(String::new())).unwrap();
        assert_eq!(view.state(), &RenderState::Loading);
        assert!(pending.url.ends_with("/0m00"), "url: {}", pending.url);
    }

    #[test]
    fn test_generations_increase_per_input() {
        let mut view = RenderLifecycle::new(RenderServer::default());
        let first = view.set_source(Some("@startuml\nA->B\n@enduml".into())).unwrap();
        let second = view.set_source(Some("@startuml\nB->C\n@enduml".into())).unwrap();
        assert!(second.generation > first.generation);
    }
}
