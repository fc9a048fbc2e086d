//! Page rasterisation: the `PageRenderer` capability seam and its pdfium
//! implementation.
//!
//! ## Why a trait?
//!
//! Rendering depends on a platform drawing surface (the pdfium C++ library).
//! Putting it behind [`PageRenderer`] keeps the core logic — the sufficiency
//! decision and the page-ordering contract — platform-independent and
//! unit-testable with a fake renderer injected through
//! [`crate::config::ExtractionConfig::renderer`].
//!
//! ## Why per-page `Result` slots?
//!
//! A single page failing to obtain a drawing surface must not lose the whole
//! document. The renderer reports one slot per page in source order; callers
//! log and skip the failures, and only an entirely failed document becomes a
//! fatal error.

use crate::error::{ExtractError, PageError};
use image::DynamicImage;
use once_cell::sync::OnceCell;
use pdfium_render::prelude::*;
use tracing::debug;

/// Renders every page of a document to a raster image at a given scale.
///
/// Implementations are invoked inside `spawn_blocking`; they may block.
pub trait PageRenderer: Send + Sync {
    /// Render all pages in source order, scaled by `scale`.
    ///
    /// Returns one slot per page: `Ok(image)` or a non-fatal [`PageError`].
    /// A document that cannot be opened at all is a fatal [`ExtractError`].
    fn render_pages(
        &self,
        bytes: &[u8],
        password: Option<&str>,
        scale: f32,
    ) -> Result<Vec<Result<DynamicImage, PageError>>, ExtractError>;
}

/// The default, pdfium-backed renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfiumRenderer;

impl PageRenderer for PdfiumRenderer {
    fn render_pages(
        &self,
        bytes: &[u8],
        password: Option<&str>,
        scale: f32,
    ) -> Result<Vec<Result<DynamicImage, PageError>>, ExtractError> {
        let pdfium = Pdfium::default();
        let document = load_document(&pdfium, bytes, password)?;

        let render_config = PdfRenderConfig::new().scale_page_by_factor(scale);

        let mut results = Vec::with_capacity(document.pages().len() as usize);
        for (idx, page) in document.pages().iter().enumerate() {
            let rendered = page
                .render_with_config(&render_config)
                .map(|bitmap| bitmap.as_image())
                .map_err(|e| PageError::RenderFailed {
                    page: idx + 1,
                    detail: format!("{e:?}"),
                });

            if let Ok(ref image) = rendered {
                debug!(
                    "Rendered page {} → {}x{} px",
                    idx + 1,
                    image.width(),
                    image.height()
                );
            }
            results.push(rendered);
        }

        Ok(results)
    }
}

/// One-time, process-wide check that a pdfium library can be bound.
///
/// The extraction entry points call this before any pdfium work so a missing
/// library surfaces as a clean [`ExtractError::RenderEngineUnavailable`]
/// instead of a panic deep inside a request.
pub fn ensure_engine() -> Result<(), ExtractError> {
    static ENGINE: OnceCell<()> = OnceCell::new();
    ENGINE
        .get_or_try_init(|| {
            Pdfium::bind_to_system_library()
                .map(|_| ())
                .map_err(|e| ExtractError::RenderEngineUnavailable(format!("{e:?}")))
        })
        .map(|_| ())
}

/// Open a PDF from an in-memory byte slice, mapping pdfium errors to the
/// crate taxonomy. Wrong or missing passwords count as unparseable bytes.
pub(crate) fn load_document<'a>(
    pdfium: &'a Pdfium,
    bytes: &'a [u8],
    password: Option<&str>,
) -> Result<PdfDocument<'a>, ExtractError> {
    pdfium.load_pdf_from_byte_slice(bytes, password).map_err(|e| {
        let err_str = format!("{e:?}");
        let detail = if err_str.to_lowercase().contains("password") {
            if password.is_some() {
                "wrong password".to_string()
            } else {
                "document is encrypted and requires a password".to_string()
            }
        } else {
            err_str
        };
        ExtractError::CorruptDocument {
            format: "pdf",
            detail,
        }
    })
}
