// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Projects a [`ButtonState`] onto the image primitive that draws it.

use druid::widget::{FillStrat, Image};
use druid::{BoxConstraints, Data, Env, ImageBuf, LayoutCtx, PaintCtx, Size, Widget};

use crate::image_set::ImageSlot;
use crate::state::ButtonState;

/// Owns the [`Image`] a picture button paints through and keeps it showing
/// the image its state selects.
pub(crate) struct Renderer {
    image: Image,
    shown: Option<(ImageSlot, u64)>,
}

impl Renderer {
    pub fn new(state: &ButtonState) -> Renderer {
        let mut renderer = Renderer {
            image: Image::new(ImageBuf::empty()).fill_mode(FillStrat::Fill),
            shown: None,
        };
        renderer.sync(state);
        renderer
    }

    /// Swap in the image selected by `state`.
    ///
    /// The image data is only replaced when the selected slot or the image
    /// set changed since the last call; returns `true` in that case.
    pub fn sync(&mut self, state: &ButtonState) -> bool {
        let slot = state.displayed_slot();
        let key = (slot, state.images().revision());
        if self.shown == Some(key) {
            return false;
        }
        self.image
            .set_image_data(state.images().get(slot).image_buf().clone());
        self.shown = Some(key);
        true
    }

    /// The slot currently handed to the image primitive.
    #[cfg(test)]
    pub fn shown_slot(&self) -> Option<ImageSlot> {
        self.shown.map(|(slot, _)| slot)
    }

    /// Stretch the image over `size`.
    pub fn layout<T: Data>(&mut self, ctx: &mut LayoutCtx, size: Size, data: &T, env: &Env) {
        let bc = BoxConstraints::tight(size);
        Widget::<T>::layout(&mut self.image, ctx, &bc, data, env);
    }

    pub fn paint<T: Data>(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        Widget::<T>::paint(&mut self.image, ctx, data, env);
    }
}
