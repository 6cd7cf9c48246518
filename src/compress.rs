//! Raw-deflate compression of diagram source text.
//!
//! The render server expects a bare deflate stream with no zlib header or
//! checksum trailer, so this uses `DeflateEncoder` rather than `ZlibEncoder`.

use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

/// Compression could not process the diagram source.
#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    /// The deflate stream could not be written or finalized.
    #[error("deflate failed: {0}")]
    Deflate(#[from] std::io::Error),
}

/// Compress diagram source text into a raw deflate stream.
///
/// The text is encoded as UTF-8 before compression. Level 9 matches the
/// render server's reference encoder, so identical source yields the same
/// byte stream (and therefore the same token) the server publishes in its
/// own examples.
pub fn compress(source: &str) -> Result<Vec<u8>, CompressError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(source.as_bytes())?;
    Ok(encoder.finish()?)
}
