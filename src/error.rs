// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors produced while building or updating a picture button.

use std::fmt;

use crate::image_set::ImageSlot;

/// Picture button errors.
#[derive(Debug)]
pub enum Error {
    /// A required image buffer was missing or empty.
    InvalidImage(ImageSlot),
    /// An image buffer could not be decoded, or a synthesized grayscale
    /// image could not be encoded.
    ImageDecode(image::ImageError),
}

/// A `Result` whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::InvalidImage(slot) => write!(f, "Invalid {slot} image: no image data."),
            Error::ImageDecode(err) => write!(f, "Image could not be processed: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidImage(_) => None,
            Error::ImageDecode(err) => Some(err),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(src: image::ImageError) -> Error {
        Error::ImageDecode(src)
    }
}
