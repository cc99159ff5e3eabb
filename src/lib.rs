// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A Druid button drawn entirely from images.
//!
//! A [`PicButton`] shows one of four images: up, down, disabled up and
//! disabled down. Only the first two are required; missing disabled images
//! are generated by converting their enabled counterpart to grayscale.
//!
//! Buttons are either momentary (down while held) or toggles (every press
//! flips them), and can be operated by any set of pointer buttons. Releases
//! of the secondary button run a separate callback.
//!
//! The button logic lives in [`ButtonState`], which receives input through
//! small capability traits ([`Mouseable`], [`Hoverable`], [`Tappable`],
//! [`Focusable`], [`Cursorable`]) and does not depend on a widget tree.
//!
//! # Features
//!
//! PNG decoding is always available. The `jpeg` feature (on by default)
//! and the `gif`, `bmp`, `ico`, `tiff` and `webp` features enable more
//! image formats.

#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod button_image;
mod error;
mod image_set;
mod input;
mod state;
pub mod widget;

#[cfg(test)]
mod tests;

pub use button_image::{grayscale_png, ButtonImage};
pub use error::{Error, Result};
pub use image_set::{ButtonImageSet, DisabledImage, ImageSlot};
pub use input::{
    Activation, Cursorable, Focusable, Hoverable, Mouseable, PointerEvent, Response, Tappable,
    PRIMARY_BUTTON, SECONDARY_BUTTON,
};
pub use state::{ButtonConfig, ButtonState};
pub use widget::{
    ActionFn, PicButton, SET_DISABLED_DOWN_IMAGE, SET_DISABLED_UP_IMAGE, SET_DOWN_IMAGE,
    SET_ENABLED, SET_MIN_SIZE, SET_PRESSED, SET_UP_IMAGE,
};
