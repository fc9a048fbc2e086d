//! Streaming rasterisation.
//!
//! [`rasterize_stream`] skips the sufficiency decision entirely — callers who
//! already know they want images (a preview pane, a page-at-a-time OCR loop)
//! get pages as a stream instead of waiting for the whole document to encode.
//! Per-page failures arrive in-band as `Err(PageError)` items so the caller
//! chooses its own tolerance; only a document that cannot be opened at all
//! fails the stream up front.

use crate::config::ExtractionConfig;
use crate::document::PageImage;
use crate::error::{ExtractError, PageError};
use crate::pipeline::encode;
use crate::pipeline::render::{self, PageRenderer, PdfiumRenderer};
use futures::stream::{self, Stream};
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

/// A stream of encoded page images in ascending page order.
pub type PageImageStream = Pin<Box<dyn Stream<Item = Result<PageImage, PageError>> + Send>>;

/// Rasterise every page of a PDF and stream the encoded images.
///
/// Rendering happens once, up front, inside `spawn_blocking`; encoding is
/// deferred to stream consumption so a caller that stops early never pays for
/// the remaining pages.
pub async fn rasterize_stream(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<PageImageStream, ExtractError> {
    let renderer: Arc<dyn PageRenderer> = match &config.renderer {
        Some(r) => Arc::clone(r),
        None => {
            render::ensure_engine()?;
            Arc::new(PdfiumRenderer)
        }
    };

    let data = bytes.to_vec();
    let password = config.password.clone();
    let scale = config.raster_scale;
    let rendered =
        tokio::task::spawn_blocking(move || renderer.render_pages(&data, password.as_deref(), scale))
            .await
            .map_err(|e| ExtractError::Internal(format!("render task failed: {e}")))??;

    if rendered.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }
    info!("Streaming {} rasterised pages", rendered.len());

    let stream = stream::iter(rendered.into_iter().enumerate().map(|(idx, slot)| {
        let page_num = idx + 1;
        slot.and_then(|image| encode::encode_page(page_num, &image))
    }));
    Ok(Box::pin(stream))
}
