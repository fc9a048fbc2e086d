//! Page image encoding.
//!
//! Rendered pages travel as JPEG — rasterised scans compress far better as
//! JPEG than PNG and the downstream OCR consumer accepts either. Pdfium hands
//! back RGBA bitmaps; JPEG has no alpha channel, so pages are flattened to
//! RGB before encoding.

use crate::document::PageImage;
use crate::error::PageError;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use tracing::debug;

/// MIME type stamped on every encoded page.
pub const JPEG_MIME: &str = "image/jpeg";

/// Encode one rendered page. `page_num` is 1-based and becomes the
/// [`PageImage::index`].
pub fn encode_page(page_num: usize, image: &DynamicImage) -> Result<PageImage, PageError> {
    let mut buf = Vec::new();
    image
        .to_rgb8()
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .map_err(|e| PageError::EncodeFailed {
            page: page_num,
            detail: e.to_string(),
        })?;

    debug!("Encoded page {} → {} bytes JPEG", page_num, buf.len());

    Ok(PageImage {
        index: page_num,
        mime_type: JPEG_MIME.to_string(),
        data: buf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn encodes_rgba_page_as_jpeg() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            12,
            8,
            Rgba([200u8, 100, 50, 255]),
        ));
        let page = encode_page(3, &image).unwrap();
        assert_eq!(page.index, 3);
        assert_eq!(page.mime_type, JPEG_MIME);
        // JPEG magic bytes
        assert_eq!(&page.data[..2], &[0xFF, 0xD8]);
    }
}
