//! PDF extraction: two-tier text-layer / rasterisation policy.
//!
//! A born-digital PDF carries its text in an embedded text layer and is
//! answered with [`CanonicalDocument::Text`]. A scanned PDF has an empty or
//! near-empty layer; returning that sliver would silently feed garbage
//! downstream, so instead every page is rasterised at the configured scale
//! and returned as [`CanonicalDocument::ImagePages`] for an OCR-capable
//! consumer. The decision point is [`needs_raster`]: a pure function of the
//! trimmed text length against the configured sufficiency threshold.
//!
//! All pdfium work runs inside `spawn_blocking` — the C library is
//! synchronous and a large document can hold a thread for seconds.

use crate::config::ExtractionConfig;
use crate::document::{CanonicalDocument, PageImage};
use crate::error::{ExtractError, PageError};
use crate::pipeline::encode;
use crate::pipeline::render::{self, PageRenderer, PdfiumRenderer};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Extract a PDF as canonical content.
///
/// Returns `Text` when the embedded text layer meets the sufficiency
/// threshold, `ImagePages` otherwise. Zero-page documents are
/// [`ExtractError::EmptyDocument`]; a rasterisation fallback in which every
/// page fails is [`ExtractError::CorruptDocument`].
pub async fn extract(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<CanonicalDocument, ExtractError> {
    render::ensure_engine()?;

    // ── Tier 1: the embedded text layer ──
    let data = bytes.to_vec();
    let password = config.password.clone();
    let (text, page_count) =
        tokio::task::spawn_blocking(move || extract_text_layer(&data, password.as_deref()))
            .await
            .map_err(|e| ExtractError::Internal(format!("text extraction task failed: {e}")))??;

    if page_count == 0 {
        return Err(ExtractError::EmptyDocument);
    }

    if !needs_raster(&text, config.sufficiency_threshold) {
        info!(
            "PDF text layer sufficient ({} pages, {} chars)",
            page_count,
            text.chars().count()
        );
        return Ok(CanonicalDocument::text(text));
    }

    // ── Tier 2: rasterise for OCR ──
    info!(
        "PDF text layer insufficient (< {} chars trimmed); rasterising {} pages at {}x",
        config.sufficiency_threshold, page_count, config.raster_scale
    );
    let renderer: Arc<dyn PageRenderer> = match &config.renderer {
        Some(r) => Arc::clone(r),
        None => Arc::new(PdfiumRenderer),
    };
    let data = bytes.to_vec();
    let password = config.password.clone();
    let scale = config.raster_scale;
    let rendered =
        tokio::task::spawn_blocking(move || renderer.render_pages(&data, password.as_deref(), scale))
            .await
            .map_err(|e| ExtractError::Internal(format!("render task failed: {e}")))??;

    let pages = assemble_page_images(rendered);
    if pages.is_empty() {
        return Err(ExtractError::CorruptDocument {
            format: "pdf",
            detail: "no pages could be rasterised; the document may be damaged".into(),
        });
    }

    Ok(CanonicalDocument::ImagePages { pages })
}

/// Whether the text layer is too sparse to stand on its own.
///
/// Counts characters (not bytes) after trimming, so multi-byte scripts are
/// not penalised.
pub(crate) fn needs_raster(text: &str, threshold: usize) -> bool {
    text.trim().chars().count() < threshold
}

/// Encode rendered pages, logging and skipping per-page failures. Indices are
/// 1-based and strictly ascending by construction.
pub(crate) fn assemble_page_images(
    rendered: Vec<Result<DynamicImage, PageError>>,
) -> Vec<PageImage> {
    let mut pages = Vec::with_capacity(rendered.len());
    for (idx, slot) in rendered.into_iter().enumerate() {
        let page_num = idx + 1;
        match slot.and_then(|image| encode::encode_page(page_num, &image)) {
            Ok(page) => pages.push(page),
            Err(e) => warn!("Skipping page {}: {}", e.page(), e),
        }
    }
    pages
}

/// Blocking: concatenate every page's text layer, blank-line separated.
///
/// Pages whose text object cannot be read are logged and contribute an empty
/// string, keeping one entry per page so the join stays aligned with page
/// order.
fn extract_text_layer(
    bytes: &[u8],
    password: Option<&str>,
) -> Result<(String, usize), ExtractError> {
    let pdfium = Pdfium::default();
    let document = render::load_document(&pdfium, bytes, password)?;

    let page_count = document.pages().len() as usize;
    let mut page_texts = Vec::with_capacity(page_count);
    for (idx, page) in document.pages().iter().enumerate() {
        match page.text() {
            Ok(text) => {
                let content = text.all();
                debug!("Page {}: {} chars of text layer", idx + 1, content.len());
                page_texts.push(content);
            }
            Err(e) => {
                warn!("Page {}: unreadable text layer: {e:?}", idx + 1);
                page_texts.push(String::new());
            }
        }
    }

    Ok((page_texts.join("\n\n"), page_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn blank_page() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255u8, 255, 255, 255])))
    }

    #[test]
    fn short_trimmed_text_needs_raster() {
        assert!(needs_raster("  hi  ", 100));
        assert!(needs_raster("", 100));
        assert!(needs_raster("   \n\t  ", 1));
    }

    #[test]
    fn threshold_is_a_strict_lower_bound() {
        let exactly_100 = "x".repeat(100);
        assert!(!needs_raster(&exactly_100, 100));
        let just_under = "x".repeat(99);
        assert!(needs_raster(&just_under, 100));
    }

    #[test]
    fn threshold_counts_chars_not_bytes() {
        // 10 chars, 30 bytes
        let hiragana = "あいうえおかきくけこ";
        assert_eq!(hiragana.len(), 30);
        assert!(needs_raster(hiragana, 11));
        assert!(!needs_raster(hiragana, 10));
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("   {}   ", "x".repeat(50));
        assert!(needs_raster(&padded, 51));
        assert!(!needs_raster(&padded, 50));
    }

    #[test]
    fn assemble_skips_failed_pages_and_keeps_indices() {
        let rendered = vec![
            Ok(blank_page()),
            Err(PageError::RenderFailed {
                page: 2,
                detail: "no surface".into(),
            }),
            Ok(blank_page()),
        ];
        let pages = assemble_page_images(rendered);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].index, 1);
        assert_eq!(pages[1].index, 3);
    }

    #[test]
    fn assemble_of_all_failures_is_empty() {
        let rendered: Vec<Result<DynamicImage, PageError>> = vec![
            Err(PageError::RenderFailed {
                page: 1,
                detail: "x".into(),
            }),
            Err(PageError::RenderFailed {
                page: 2,
                detail: "y".into(),
            }),
        ];
        assert!(assemble_page_images(rendered).is_empty());
    }
}
