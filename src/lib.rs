//! # docingest
//!
//! Normalise uploaded documents into canonical content for generative
//! pipelines.
//!
//! One call turns raw upload bytes plus a filename into a
//! [`CanonicalDocument`]: either extracted **text** (TXT/MD, DOCX, XLSX, and
//! born-digital PDFs) or rasterised **page images** (scanned PDFs whose text
//! layer is too sparse to use), ready for an OCR-capable consumer.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────┐   ┌────────┐   ┌──────────────────────┐   ┌───────────┐
//! │ (bytes, │──▶│ Router │──▶│ text | word | sheet  │──▶│ Assembler │──▶ CanonicalDocument
//! │  name)  │   │ (ext.) │   │ pdf ─▶ render+encode │   │ non-empty │
//! └─────────┘   └────────┘   └──────────────────────┘   └───────────┘
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use docingest::{extract, CanonicalDocument, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = tokio::fs::read("report.pdf").await?;
//!     let config = ExtractionConfig::default();
//!
//!     match extract(&bytes, "report.pdf", &config).await? {
//!         CanonicalDocument::Text { content } => println!("{content}"),
//!         CanonicalDocument::ImagePages { pages } => {
//!             println!("scanned document: {} page images", pages.len());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming page images
//!
//! When the caller already knows it wants images, [`rasterize_stream`] skips
//! the sufficiency decision and yields encoded pages one at a time:
//!
//! ```rust,no_run
//! use docingest::{rasterize_stream, ExtractionConfig};
//! use futures::StreamExt;
//!
//! # async fn demo(bytes: &[u8]) -> Result<(), docingest::ExtractError> {
//! let mut pages = rasterize_stream(bytes, &ExtractionConfig::default()).await?;
//! while let Some(page) = pages.next().await {
//!     match page {
//!         Ok(image) => println!("page {}: {} bytes", image.index, image.data.len()),
//!         Err(e) => eprintln!("skipping page {}: {e}", e.page()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## PDF rendering engine
//!
//! PDF support binds dynamically to a pdfium library at runtime. Place a
//! pdfium build next to the executable or point `PDFIUM_LIB_PATH` at it;
//! when no library can be found, PDF extraction fails with
//! [`ExtractError::RenderEngineUnavailable`] and every other format keeps
//! working.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod stream;

pub use config::{
    ExtractionConfig, ExtractionConfigBuilder, DEFAULT_RASTER_SCALE,
    DEFAULT_SUFFICIENCY_THRESHOLD,
};
pub use document::{CanonicalDocument, PageImage};
pub use error::{ExtractError, PageError};
pub use extract::{extract, extract_file, extract_sync};
pub use pipeline::render::{ensure_engine, PageRenderer, PdfiumRenderer};
pub use pipeline::router::DocumentFormat;
pub use stream::{rasterize_stream, PageImageStream};
