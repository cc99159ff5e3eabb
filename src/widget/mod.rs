// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The picture button widget and its commands.

mod pic_button;
mod renderer;

pub use pic_button::{
    ActionFn, PicButton, SET_DISABLED_DOWN_IMAGE, SET_DISABLED_UP_IMAGE, SET_DOWN_IMAGE,
    SET_ENABLED, SET_MIN_SIZE, SET_PRESSED, SET_UP_IMAGE,
};

#[cfg(test)]
pub(crate) use pic_button::{release, ActivePress};
