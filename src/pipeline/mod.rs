//! Pipeline stages for document normalisation.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. the rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! (bytes, name) ──▶ router ──▶ text | word | sheet | pdf ──▶ assembler
//!                 (extension)                  │
//!                                              └─▶ render ──▶ encode
//!                                                  (pdfium)   (JPEG/base64)
//! ```
//!
//! 1. [`router`] — map the file extension to an extractor; no content sniffing
//! 2. [`text`]   — strict UTF-8 decode of the raw bytes
//! 3. [`word`]   — raw text stream of a DOCX package, reading order preserved
//! 4. [`sheet`]  — deterministic textual rendering of workbook sheets
//! 5. [`pdf`]    — text layer per page; decides the rasterisation fallback;
//!    runs in `spawn_blocking` because pdfium is not async-safe
//! 6. [`render`] — the `PageRenderer` capability seam + pdfium implementation
//! 7. [`encode`] — JPEG-encode each raster into a `PageImage`

pub mod encode;
pub mod pdf;
pub mod render;
pub mod router;
pub mod sheet;
pub mod text;
pub mod word;
