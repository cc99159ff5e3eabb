// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Decoded button images and grayscale synthesis.

use std::fmt;
use std::sync::Arc;

use druid::piet::ImageFormat;
use druid::{ImageBuf, Size};
use image::codecs::png::PngEncoder;
use image::{ColorType, GrayImage, ImageEncoder, Luma};
use tracing::trace;

use crate::error::Result;

/// One state image of a picture button.
///
/// Holds the encoded bytes the image was created from together with the
/// decoded RGBA pixels handed to the display primitive. Cloning is cheap;
/// both halves are reference counted.
#[derive(Clone)]
pub struct ButtonImage {
    encoded: Arc<[u8]>,
    pixels: ImageBuf,
}

impl ButtonImage {
    /// Decode an image from encoded bytes in any format `image` supports.
    pub fn decode(encoded: &[u8]) -> Result<ButtonImage> {
        ButtonImage::from_shared(Arc::from(encoded))
    }

    fn from_shared(encoded: Arc<[u8]>) -> Result<ButtonImage> {
        let rgba = image::load_from_memory(&encoded)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = ImageBuf::from_raw(
            rgba.into_raw(),
            ImageFormat::RgbaSeparate,
            width as usize,
            height as usize,
        );
        Ok(ButtonImage { encoded, pixels })
    }

    /// Synthesize the grayscale counterpart of this image.
    ///
    /// The result is encoded as PNG, exactly as [`grayscale_png`] would
    /// produce it from [`encoded`](ButtonImage::encoded).
    pub fn grayscale(&self) -> Result<ButtonImage> {
        let gray = luma_from_rgba(
            self.pixels.width() as u32,
            self.pixels.height() as u32,
            self.pixels.raw_pixels(),
        );
        let png = encode_png(&gray)?;
        ButtonImage::from_shared(png.into())
    }

    /// The bytes this image was decoded from.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    /// The decoded pixels.
    pub fn image_buf(&self) -> &ImageBuf {
        &self.pixels
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> Size {
        self.pixels.size()
    }
}

impl fmt::Debug for ButtonImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ButtonImage")
            .field("encoded_len", &self.encoded.len())
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

/// Convert an encoded image to a single channel PNG.
///
/// Each pixel becomes `round(0.299 R + 0.587 G + 0.114 B)` (ITU-R BT.601).
/// Translucent pixels are composited over black first.
pub fn grayscale_png(encoded: &[u8]) -> Result<Vec<u8>> {
    let rgba = image::load_from_memory(encoded)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    encode_png(&luma_from_rgba(width, height, rgba.as_raw()))
}

/// BT.601 luma, rounded half up.
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

fn premultiplied_luma(px: &[u8]) -> u8 {
    let y = u32::from(luma(px[0], px[1], px[2]));
    ((y * u32::from(px[3]) + 127) / 255) as u8
}

fn luma_from_rgba(width: u32, height: u32, rgba: &[u8]) -> GrayImage {
    trace!("synthesizing {}x{} grayscale image", width, height);
    GrayImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Luma([premultiplied_luma(&rgba[idx..idx + 4])])
    })
}

fn encode_png(gray: &GrayImage) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        gray.as_raw(),
        gray.width(),
        gray.height(),
        ColorType::L8,
    )?;
    Ok(png)
}
