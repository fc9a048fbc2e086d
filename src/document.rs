//! Canonical output types handed to the downstream generative engine.
//!
//! Extraction produces exactly one of two shapes: a text blob, or an ordered
//! list of page images. The contract is an explicit tagged variant: every
//! consumer pattern-matches both arms of [`CanonicalDocument`] instead of
//! sniffing a runtime type.
//!
//! On the wire (the transport boundary to the generative engine) a
//! [`PageImage`] serialises as `{ "index": n, "mimeType": "image/jpeg",
//! "data": "<base64>" }` — the `data` field is base64-encoded because the
//! consumer embeds it directly in a JSON request body.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The normalised result of ingesting one uploaded document.
///
/// Exactly one of the two shapes is produced per extraction; the pipeline
/// never returns both, and the Content Assembler rejects either arm when it
/// would be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CanonicalDocument {
    /// Extracted text, non-empty after trimming.
    Text { content: String },
    /// Rasterised pages for an OCR-capable consumer, ordered by ascending
    /// 1-based page index with no gaps or duplicates.
    ImagePages { pages: Vec<PageImage> },
}

impl CanonicalDocument {
    /// Shorthand constructor for the text arm.
    pub fn text(content: impl Into<String>) -> Self {
        CanonicalDocument::Text {
            content: content.into(),
        }
    }

    /// True when this document carries extracted text.
    pub fn is_text(&self) -> bool {
        matches!(self, CanonicalDocument::Text { .. })
    }

    /// The extracted text, if this is the text arm.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CanonicalDocument::Text { content } => Some(content),
            CanonicalDocument::ImagePages { .. } => None,
        }
    }

    /// The rasterised pages, if this is the image arm.
    pub fn as_pages(&self) -> Option<&[PageImage]> {
        match self {
            CanonicalDocument::Text { .. } => None,
            CanonicalDocument::ImagePages { pages } => Some(pages),
        }
    }
}

/// One rasterised PDF page, immutable after creation.
///
/// Produced by the page rasteriser, owned by the [`CanonicalDocument`] that
/// contains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageImage {
    /// 1-based page index, matching source document order.
    pub index: usize,
    /// Image encoding identifier, e.g. `image/jpeg`.
    pub mime_type: String,
    /// Encoded image bytes. Serialised as base64.
    #[serde(
        serialize_with = "serialize_base64",
        deserialize_with = "deserialize_base64"
    )]
    pub data: Vec<u8>,
}

fn serialize_base64<S: Serializer>(data: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&STANDARD.encode(data))
}

fn deserialize_base64<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(d)?;
    STANDARD.decode(&encoded).map_err(serde::de::Error::custom)
}
