// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper fixtures for test writing.
//!
//! Images are generated and encoded in memory, so no asset files are needed.

use druid::{Modifiers, MouseButton, MouseButtons};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

use crate::input::PointerEvent;
use crate::state::{ButtonConfig, ButtonState};

/// Encode an RGBA image as PNG.
pub fn encode(image: &RgbaImage) -> Vec<u8> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .expect("in-memory PNG encoding");
    png
}

/// A PNG filled with one color.
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode(&RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

/// A PNG with a different color in every pixel.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    encode(&RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8, 255])
    }))
}

pub fn state_with(config: ButtonConfig) -> ButtonState {
    let up = solid_png(24, 16, [240, 200, 10, 255]);
    let down = solid_png(24, 16, [10, 120, 240, 255]);
    ButtonState::new(&up, &down, None, None, config).expect("fixture images decode")
}

/// A 24x16 push button operated by the primary button.
pub fn momentary_state() -> ButtonState {
    state_with(ButtonConfig::momentary())
}

/// A 24x16 toggle button operated by the primary button.
pub fn toggle_state() -> ButtonState {
    state_with(ButtonConfig::toggle())
}

/// Every button a mouse has.
pub fn all_buttons() -> MouseButtons {
    MouseButtons::new()
        .with(MouseButton::Left)
        .with(MouseButton::Right)
        .with(MouseButton::Middle)
}

pub fn press(button: MouseButton) -> PointerEvent {
    PointerEvent::new(button)
}

pub fn press_with(button: MouseButton, mods: Modifiers) -> PointerEvent {
    PointerEvent::new(button).with_mods(mods)
}
