//! Error types for the docingest library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ExtractError`] — **Fatal**: the extraction cannot produce a canonical
//!   document at all (unsupported format, corrupt bytes, nothing extractable).
//!   Returned as `Err(ExtractError)` from the top-level `extract*` functions.
//!
//! * [`PageError`] — **Non-fatal**: a single PDF page failed to rasterise or
//!   encode while its siblings are fine. The eager pipeline logs the page and
//!   skips it; the streaming pipeline surfaces it per item so callers can
//!   decide their own tolerance.
//!
//! Every fatal variant carries a short, specific message so a UI can tell
//! "unsupported format" apart from "file damaged" apart from "nothing could
//! be extracted" without string matching.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the docingest library.
///
/// Per-page rasterisation failures use [`PageError`] and never abort a whole
/// document on their own.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Extension not recognised and the best-effort plain-text decode failed.
    #[error("Unsupported file type: '.{extension}'. Use .txt, .md, .pdf, .docx, or .xlsx.")]
    UnsupportedFormat { extension: String },

    /// `.doc` is rejected outright; its bytes are never inspected.
    #[error(".doc files are not supported. Save the document as .docx and try again.")]
    LegacyFormatUnsupported,

    /// The bytes could not be parsed as their claimed format.
    #[error("The file could not be read as {format}: {detail}")]
    CorruptDocument {
        format: &'static str,
        detail: String,
    },

    /// Well-formed container with no usable pages, sheets, or text.
    #[error("No content could be extracted from the document.")]
    EmptyDocument,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to the PDF rendering engine: {0}\n\
         Set PDFIUM_LIB_PATH or install libpdfium for your platform."
    )]
    RenderEngineUnavailable(String),

    /// Could not read the input file (CLI / `extract_file` path).
    #[error("Failed to read input file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single PDF page during the rasterisation fallback.
///
/// The overall extraction continues unless ALL pages fail, in which case the
/// pipeline reports [`ExtractError::CorruptDocument`].
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// Page rasterisation failed (no drawing surface, engine error).
    #[error("Page {page}: rasterisation failed: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// The rendered page could not be encoded as an image.
    #[error("Page {page}: image encoding failed: {detail}")]
    EncodeFailed { page: usize, detail: String },
}

impl PageError {
    /// 1-based page number the error refers to.
    pub fn page(&self) -> usize {
        match self {
            PageError::RenderFailed { page, .. } | PageError::EncodeFailed { page, .. } => *page,
        }
    }
}
