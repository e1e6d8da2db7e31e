//! Text codec
//!
//! Compresses documents to byte blobs before storage and restores them on
//! load. The frame is LZ4 block compression with the uncompressed size
//! prepended, so `decode` can reject truncated or corrupted payloads
//! instead of producing garbage text.

use crate::errors::{Result, TvError};
use lz4_flex::{compress_prepend_size, decompress_size_prepended};

/// Compress a document into a storable byte blob.
///
/// Deterministic and total: every string (including the empty string)
/// has an encoding, and `decode(encode(t)) == t`.
pub fn encode(text: &str) -> Vec<u8> {
    compress_prepend_size(text.as_bytes())
}

/// Restore a document from a stored blob.
///
/// Fails with `TvError::Decode` when the blob is not a valid size-prepended
/// LZ4 frame or the decompressed bytes are not valid UTF-8.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let raw = decompress_size_prepended(bytes).map_err(|e| TvError::Decode {
        reason: e.to_string(),
    })?;

    String::from_utf8(raw).map_err(|e| TvError::Decode {
        reason: format!("payload is not valid UTF-8: {}", e),
    })
}
