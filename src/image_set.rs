// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The four state images of a picture button.

use std::fmt;

use tracing::trace;

use crate::button_image::ButtonImage;
use crate::error::{Error, Result};

/// Identifies one of the four images of a [`ButtonImageSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// Shown while enabled and released.
    Up,
    /// Shown while enabled and pressed.
    Down,
    /// Shown while disabled and released.
    DisabledUp,
    /// Shown while disabled and pressed.
    DisabledDown,
}

impl ImageSlot {
    /// Every slot, in display table order.
    pub const ALL: [ImageSlot; 4] = [
        ImageSlot::Up,
        ImageSlot::Down,
        ImageSlot::DisabledUp,
        ImageSlot::DisabledDown,
    ];

    /// The slot displayed for the given enabled and pressed flags.
    pub fn for_state(enabled: bool, pressed: bool) -> ImageSlot {
        match (enabled, pressed) {
            (true, false) => ImageSlot::Up,
            (true, true) => ImageSlot::Down,
            (false, false) => ImageSlot::DisabledUp,
            (false, true) => ImageSlot::DisabledDown,
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ImageSlot::Up => "up",
            ImageSlot::Down => "down",
            ImageSlot::DisabledUp => "disabled up",
            ImageSlot::DisabledDown => "disabled down",
        };
        f.write_str(name)
    }
}

/// A disabled state image and where it came from.
#[derive(Debug, Clone)]
pub enum DisabledImage {
    /// Supplied by the caller; never regenerated.
    Explicit(ButtonImage),
    /// Grayscale synthesis of `source`, regenerated whenever `source` is
    /// replaced.
    AutoFrom {
        /// The slot the image follows.
        source: ImageSlot,
        /// The current synthesized image.
        image: ButtonImage,
    },
}

impl DisabledImage {
    /// Synthesize a disabled image that follows `source`.
    pub fn synthesize(source: ImageSlot, from: &ButtonImage) -> Result<DisabledImage> {
        Ok(DisabledImage::AutoFrom {
            source,
            image: from.grayscale()?,
        })
    }

    /// The image to display.
    pub fn image(&self) -> &ButtonImage {
        match self {
            DisabledImage::Explicit(image) | DisabledImage::AutoFrom { image, .. } => image,
        }
    }

    /// Returns `true` if this image is synthesized.
    pub fn is_auto(&self) -> bool {
        matches!(self, DisabledImage::AutoFrom { .. })
    }
}

/// The up, down, disabled-up and disabled-down images of a button.
///
/// Every mutation is all-or-nothing: when a replacement fails the set is
/// left exactly as it was.
#[derive(Debug)]
pub struct ButtonImageSet {
    up: ButtonImage,
    down: ButtonImage,
    disabled_up: DisabledImage,
    disabled_down: DisabledImage,
    revision: u64,
}

impl ButtonImageSet {
    /// Build a set from encoded images.
    ///
    /// `up` and `down` are required. A missing disabled image is synthesized
    /// from its source and kept in sync with it.
    pub fn new(
        up: &[u8],
        down: &[u8],
        disabled_up: Option<&[u8]>,
        disabled_down: Option<&[u8]>,
    ) -> Result<ButtonImageSet> {
        if up.is_empty() {
            return Err(Error::InvalidImage(ImageSlot::Up));
        }
        if down.is_empty() {
            return Err(Error::InvalidImage(ImageSlot::Down));
        }
        let up = ButtonImage::decode(up)?;
        let down = ButtonImage::decode(down)?;
        let disabled_up = disabled_for(ImageSlot::Up, &up, disabled_up)?;
        let disabled_down = disabled_for(ImageSlot::Down, &down, disabled_down)?;
        Ok(ButtonImageSet {
            up,
            down,
            disabled_up,
            disabled_down,
            revision: 0,
        })
    }

    /// The image in `slot`.
    pub fn get(&self, slot: ImageSlot) -> &ButtonImage {
        match slot {
            ImageSlot::Up => &self.up,
            ImageSlot::Down => &self.down,
            ImageSlot::DisabledUp => self.disabled_up.image(),
            ImageSlot::DisabledDown => self.disabled_down.image(),
        }
    }

    /// The provenance of a disabled slot, or `None` for `Up` and `Down`.
    pub fn disabled(&self, slot: ImageSlot) -> Option<&DisabledImage> {
        match slot {
            ImageSlot::DisabledUp => Some(&self.disabled_up),
            ImageSlot::DisabledDown => Some(&self.disabled_down),
            ImageSlot::Up | ImageSlot::Down => None,
        }
    }

    /// Returns `true` if `slot` holds a synthesized image.
    pub fn is_auto(&self, slot: ImageSlot) -> bool {
        self.disabled(slot).map_or(false, DisabledImage::is_auto)
    }

    /// Incremented on every successful replacement.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the up image, regenerating the disabled-up image if it is
    /// synthesized.
    pub fn set_up(&mut self, bytes: &[u8]) -> Result<()> {
        replace_source(ImageSlot::Up, &mut self.up, &mut self.disabled_up, bytes)?;
        self.bump();
        Ok(())
    }

    /// Replace the down image, regenerating the disabled-down image if it is
    /// synthesized.
    pub fn set_down(&mut self, bytes: &[u8]) -> Result<()> {
        replace_source(
            ImageSlot::Down,
            &mut self.down,
            &mut self.disabled_down,
            bytes,
        )?;
        self.bump();
        Ok(())
    }

    /// Replace the disabled-up image.
    ///
    /// `Some` stores the image as given and stops following the up image;
    /// `None` synthesizes it from the current up image and follows it again.
    pub fn set_disabled_up(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        self.disabled_up = disabled_for(ImageSlot::Up, &self.up, bytes)?;
        self.bump();
        Ok(())
    }

    /// Replace the disabled-down image. See [`set_disabled_up`].
    ///
    /// [`set_disabled_up`]: ButtonImageSet::set_disabled_up
    pub fn set_disabled_down(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        self.disabled_down = disabled_for(ImageSlot::Down, &self.down, bytes)?;
        self.bump();
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        trace!("button images now at revision {}", self.revision);
    }
}

fn disabled_for(
    source: ImageSlot,
    from: &ButtonImage,
    bytes: Option<&[u8]>,
) -> Result<DisabledImage> {
    match bytes {
        Some(bytes) => Ok(DisabledImage::Explicit(ButtonImage::decode(bytes)?)),
        None => DisabledImage::synthesize(source, from),
    }
}

fn replace_source(
    slot: ImageSlot,
    image: &mut ButtonImage,
    disabled: &mut DisabledImage,
    bytes: &[u8],
) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::InvalidImage(slot));
    }
    let replacement = ButtonImage::decode(bytes)?;
    let regenerated = match disabled {
        DisabledImage::AutoFrom { source, .. } => {
            Some(DisabledImage::synthesize(*source, &replacement)?)
        }
        DisabledImage::Explicit(_) => None,
    };
    if let Some(regenerated) = regenerated {
        *disabled = regenerated;
    }
    *image = replacement;
    Ok(())
}
