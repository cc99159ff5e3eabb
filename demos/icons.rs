// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Button faces drawn in memory, shared by the demos.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageResult, Rgba, RgbaImage};

pub const SIZE: u32 = 48;

#[derive(Clone, Copy)]
pub enum Glyph {
    Play,
    Stop,
    Exit,
}

#[derive(Clone, Copy)]
pub struct Style {
    pub face: [u8; 4],
    pub ink: [u8; 4],
    /// Draw a stripe across the face, used for hand-made disabled images.
    pub struck: bool,
}

pub const UP: Style = Style {
    face: [210, 210, 210, 255],
    ink: [30, 110, 30, 255],
    struck: false,
};

pub const DOWN: Style = Style {
    face: [150, 150, 150, 255],
    ink: [20, 200, 20, 255],
    struck: false,
};

const BORDER: [u8; 4] = [60, 60, 60, 255];
const STRIPE: [u8; 4] = [200, 40, 40, 255];

fn covers(glyph: Glyph, x: f64, y: f64) -> bool {
    match glyph {
        Glyph::Play => x >= 0.3 && x <= 0.75 && (y - 0.5).abs() <= (0.75 - x) * 0.6,
        Glyph::Stop => (0.3..=0.7).contains(&x) && (0.3..=0.7).contains(&y),
        Glyph::Exit => {
            (0.25..=0.75).contains(&x)
                && (0.25..=0.75).contains(&y)
                && ((x - y).abs() < 0.07 || (x + y - 1.0).abs() < 0.07)
        }
    }
}

/// Draw `glyph` in `style` and encode it as PNG.
pub fn icon(glyph: Glyph, style: Style) -> ImageResult<Vec<u8>> {
    let last = SIZE - 2;
    let image = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (fx, fy) = (x as f64 / SIZE as f64, y as f64 / SIZE as f64);
        if x < 2 || y < 2 || x >= last || y >= last {
            Rgba(BORDER)
        } else if style.struck && (fx - (1.0 - fy)).abs() < 0.04 {
            Rgba(STRIPE)
        } else if covers(glyph, fx, fy) {
            Rgba(style.ink)
        } else {
            Rgba(style.face)
        }
    });
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(image.as_raw(), SIZE, SIZE, ColorType::Rgba8)?;
    Ok(png)
}
