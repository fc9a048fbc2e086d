//! Top-level extraction entry points and the Content Assembler.
//!
//! [`extract`] is the one function most callers need: route by extension, run
//! the matching extractor, then pass the result through [`assemble`] — the
//! single choke point that enforces the non-emptiness invariant for every
//! format. [`extract_file`] and [`extract_sync`] are thin conveniences over
//! it.

use crate::config::ExtractionConfig;
use crate::document::CanonicalDocument;
use crate::error::ExtractError;
use crate::pipeline::router::DocumentFormat;
use crate::pipeline::{pdf, sheet, text, word};
use std::path::Path;
use tracing::{debug, info};

/// Extract an uploaded document into its canonical form.
///
/// `filename` is used only for routing; the bytes are never sniffed.
///
/// # Errors
///
/// * [`ExtractError::LegacyFormatUnsupported`] for `.doc`, unconditionally.
/// * [`ExtractError::UnsupportedFormat`] when the extension is unknown and
///   the bytes are not UTF-8 text.
/// * [`ExtractError::CorruptDocument`] when the bytes cannot be parsed as
///   their claimed format.
/// * [`ExtractError::EmptyDocument`] when parsing succeeds but nothing
///   usable comes out.
pub async fn extract(
    bytes: &[u8],
    filename: &str,
    config: &ExtractionConfig,
) -> Result<CanonicalDocument, ExtractError> {
    info!("Extracting '{}' ({} bytes)", filename, bytes.len());

    // ── Step 1: route by extension ──
    let format = DocumentFormat::from_filename(filename);
    debug!("Routed '{}' as {:?}", filename, format);

    // ── Step 2: run the matching extractor ──
    let document = match format {
        DocumentFormat::PlainText => CanonicalDocument::text(text::extract(bytes)?),
        DocumentFormat::Pdf => pdf::extract(bytes, config).await?,
        DocumentFormat::WordProcessor => {
            let data = bytes.to_vec();
            let extracted = tokio::task::spawn_blocking(move || word::extract(&data))
                .await
                .map_err(|e| ExtractError::Internal(format!("docx task failed: {e}")))??;
            CanonicalDocument::text(extracted)
        }
        DocumentFormat::Spreadsheet => {
            let data = bytes.to_vec();
            let extracted = tokio::task::spawn_blocking(move || sheet::extract(&data))
                .await
                .map_err(|e| ExtractError::Internal(format!("workbook task failed: {e}")))??;
            CanonicalDocument::text(extracted)
        }
        DocumentFormat::LegacyDoc => return Err(ExtractError::LegacyFormatUnsupported),
        DocumentFormat::Unknown { extension } => match text::extract(bytes) {
            Ok(extracted) => {
                debug!("Unknown extension '.{extension}' decoded as plain text");
                CanonicalDocument::text(extracted)
            }
            Err(_) => return Err(ExtractError::UnsupportedFormat { extension }),
        },
    };

    // ── Step 3: assemble ──
    assemble(document)
}

/// Read a file from disk and extract it; the filename comes from the path.
pub async fn extract_file(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<CanonicalDocument, ExtractError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ExtractError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    extract(&bytes, &filename, config).await
}

/// Blocking wrapper around [`extract`] for callers without a tokio runtime.
///
/// Must not be called from within an async context.
pub fn extract_sync(
    bytes: &[u8],
    filename: &str,
    config: &ExtractionConfig,
) -> Result<CanonicalDocument, ExtractError> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| ExtractError::Internal(format!("failed to create tokio runtime: {e}")))?;
    runtime.block_on(extract(bytes, filename, config))
}

/// The Content Assembler: every extractor's output passes through here.
///
/// Enforces the two structural invariants of a canonical document:
/// non-emptiness (trimmed text, at least one page image) and strictly
/// ascending 1-based page indices.
fn assemble(document: CanonicalDocument) -> Result<CanonicalDocument, ExtractError> {
    match &document {
        CanonicalDocument::Text { content } => {
            if content.trim().is_empty() {
                return Err(ExtractError::EmptyDocument);
            }
        }
        CanonicalDocument::ImagePages { pages } => {
            if pages.is_empty() {
                return Err(ExtractError::EmptyDocument);
            }
            let ordered =
                pages[0].index >= 1 && pages.windows(2).all(|w| w[0].index < w[1].index);
            if !ordered {
                return Err(ExtractError::Internal(
                    "page images are not in ascending page order".into(),
                ));
            }
        }
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageImage;

    fn page(index: usize) -> PageImage {
        PageImage {
            index,
            mime_type: "image/jpeg".into(),
            data: vec![0xFF, 0xD8],
        }
    }

    #[test]
    fn assembler_rejects_whitespace_only_text() {
        let err = assemble(CanonicalDocument::text("   \n\t  ")).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyDocument));
    }

    #[test]
    fn assembler_rejects_zero_pages() {
        let err = assemble(CanonicalDocument::ImagePages { pages: vec![] }).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyDocument));
    }

    #[test]
    fn assembler_accepts_sparse_but_ascending_pages() {
        let doc = CanonicalDocument::ImagePages {
            pages: vec![page(1), page(3), page(7)],
        };
        assert!(assemble(doc).is_ok());
    }

    #[test]
    fn assembler_rejects_out_of_order_pages() {
        let doc = CanonicalDocument::ImagePages {
            pages: vec![page(2), page(1)],
        };
        assert!(matches!(
            assemble(doc).unwrap_err(),
            ExtractError::Internal(_)
        ));
    }

    #[test]
    fn assembler_rejects_zero_based_indices() {
        let doc = CanonicalDocument::ImagePages {
            pages: vec![page(0), page(1)],
        };
        assert!(matches!(
            assemble(doc).unwrap_err(),
            ExtractError::Internal(_)
        ));
    }

    #[test]
    fn assembler_passes_text_through_unchanged() {
        let doc = assemble(CanonicalDocument::text("  hello  ")).unwrap();
        assert_eq!(doc.as_text(), Some("  hello  "));
    }
}
