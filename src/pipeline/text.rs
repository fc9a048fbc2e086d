//! Plain-text extraction: strict UTF-8 decode of the raw bytes.
//!
//! Deliberately no sufficiency check here — even whitespace-only input passes
//! this stage. The non-emptiness invariant belongs to the Content Assembler,
//! which rejects it once, for every extractor, at the single choke point.

use crate::error::ExtractError;

/// Decode the upload as UTF-8 text.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::CorruptDocument {
        format: "plain text",
        detail: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })
}
