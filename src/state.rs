// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The logical model of a picture button.

use druid::{Cursor, KbKey, Modifiers, MouseButton, MouseButtons, Size};
use tracing::trace;

use crate::button_image::ButtonImage;
use crate::error::Result;
use crate::image_set::{ButtonImageSet, ImageSlot};
use crate::input::{
    Activation, Cursorable, Focusable, Hoverable, Mouseable, PointerEvent, Response, Tappable,
    PRIMARY_BUTTON,
};

/// How a button reacts to presses. Fixed once the button exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    toggle: bool,
    accepted_buttons: MouseButtons,
}

impl ButtonConfig {
    /// Create a configuration.
    ///
    /// An empty `accepted_buttons` set means "primary button only".
    pub fn new(toggle: bool, accepted_buttons: MouseButtons) -> ButtonConfig {
        let accepted_buttons = if accepted_buttons.is_empty() {
            MouseButtons::new().with(PRIMARY_BUTTON)
        } else {
            accepted_buttons
        };
        ButtonConfig {
            toggle,
            accepted_buttons,
        }
    }

    /// A push button that is down only while held.
    pub fn momentary() -> ButtonConfig {
        ButtonConfig::new(false, MouseButtons::new())
    }

    /// A button whose every press flips it between up and down.
    pub fn toggle() -> ButtonConfig {
        ButtonConfig::new(true, MouseButtons::new())
    }

    /// Builder-style method for choosing the pointer buttons that operate
    /// the button.
    pub fn with_accepted_buttons(self, accepted_buttons: MouseButtons) -> ButtonConfig {
        ButtonConfig::new(self.toggle, accepted_buttons)
    }

    /// Returns `true` for toggle buttons.
    pub fn is_toggle(&self) -> bool {
        self.toggle
    }

    /// The pointer buttons that operate the button.
    pub fn accepted_buttons(&self) -> MouseButtons {
        self.accepted_buttons
    }

    /// Returns `true` if `button` operates the button.
    pub fn accepts(&self, button: MouseButton) -> bool {
        self.accepted_buttons.contains(button)
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        ButtonConfig::momentary()
    }
}

/// The state of one picture button: its images, its configuration and the
/// flags driven by input.
///
/// All input arrives through the capability traits ([`Mouseable`],
/// [`Hoverable`], [`Tappable`], [`Focusable`], [`Cursorable`]); the
/// remaining methods are programmatic and never activate the button.
#[derive(Debug)]
pub struct ButtonState {
    images: ButtonImageSet,
    config: ButtonConfig,
    min_size: Size,
    enabled: bool,
    pressed: bool,
    pointer_captured: bool,
    last_modifier_key: Modifiers,
    last_pointer_button: MouseButton,
}

impl ButtonState {
    /// Build the state from encoded images.
    ///
    /// `up` and `down` are required; missing disabled images are synthesized
    /// in grayscale. The minimum size is the pixel size of the up image.
    pub fn new(
        up: &[u8],
        down: &[u8],
        disabled_up: Option<&[u8]>,
        disabled_down: Option<&[u8]>,
        config: ButtonConfig,
    ) -> Result<ButtonState> {
        let images = ButtonImageSet::new(up, down, disabled_up, disabled_down)?;
        Ok(ButtonState::from_images(images, config))
    }

    /// Build the state around an existing image set.
    pub fn from_images(images: ButtonImageSet, config: ButtonConfig) -> ButtonState {
        let min_size = images.get(ImageSlot::Up).size();
        ButtonState {
            images,
            config,
            min_size,
            enabled: true,
            pressed: false,
            pointer_captured: false,
            last_modifier_key: Modifiers::empty(),
            last_pointer_button: MouseButton::None,
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn images(&self) -> &ButtonImageSet {
        &self.images
    }

    /// Returns `true` if the button is down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Set the button up or down without activating it.
    ///
    /// Returns `true` if the state changed and the button needs a repaint.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        if self.pressed == pressed {
            return false;
        }
        self.pressed = pressed;
        trace!("picture button set {}", if pressed { "down" } else { "up" });
        true
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button.
    ///
    /// Returns `true` if the state changed and the button needs a repaint.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        trace!(enabled, "picture button enabled state changed");
        true
    }

    /// Returns `true` while a press that started inside the button is held.
    pub fn is_pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// The modifiers held at the most recent qualifying release.
    pub fn last_modifier_key(&self) -> Modifiers {
        self.last_modifier_key
    }

    /// The button of the most recent qualifying release.
    ///
    /// `MouseButton::None` until the first release.
    pub fn last_pointer_button(&self) -> MouseButton {
        self.last_pointer_button
    }

    /// The size the button asks for during layout.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Override the minimum size derived from the up image.
    pub fn set_min_size(&mut self, min_size: Size) -> Response {
        self.min_size = min_size;
        Response::relayout()
    }

    /// The slot selected by the current enabled and pressed flags.
    pub fn displayed_slot(&self) -> ImageSlot {
        ImageSlot::for_state(self.enabled, self.pressed)
    }

    /// The image selected by the current enabled and pressed flags.
    pub fn displayed_image(&self) -> &ButtonImage {
        self.images.get(self.displayed_slot())
    }

    /// Replace the up image. A synthesized disabled-up image follows it.
    pub fn set_up_image(&mut self, bytes: &[u8]) -> Result<Response> {
        self.images.set_up(bytes)?;
        Ok(Response::repaint())
    }

    /// Replace the down image. A synthesized disabled-down image follows it.
    pub fn set_down_image(&mut self, bytes: &[u8]) -> Result<Response> {
        self.images.set_down(bytes)?;
        Ok(Response::repaint())
    }

    /// Replace the disabled-up image, or synthesize it again with `None`.
    pub fn set_disabled_up_image(&mut self, bytes: Option<&[u8]>) -> Result<Response> {
        self.images.set_disabled_up(bytes)?;
        Ok(Response::repaint())
    }

    /// Replace the disabled-down image, or synthesize it again with `None`.
    pub fn set_disabled_down_image(&mut self, bytes: Option<&[u8]>) -> Result<Response> {
        self.images.set_disabled_down(bytes)?;
        Ok(Response::repaint())
    }

    fn operable_by(&self, button: MouseButton) -> bool {
        self.enabled && self.config.accepts(button)
    }
}

impl Mouseable for ButtonState {
    fn mouse_down(&mut self, event: &PointerEvent) -> Response {
        if !self.operable_by(event.button) {
            return Response::NONE;
        }
        self.pressed = !self.config.is_toggle() || !self.pressed;
        self.pointer_captured = true;
        trace!(button = ?event.button, pressed = self.pressed, "picture button mouse down");
        Response::repaint()
    }

    fn mouse_up(&mut self, event: &PointerEvent) -> Response {
        if !self.operable_by(event.button) {
            return Response::NONE;
        }
        self.last_modifier_key = event.mods;
        self.last_pointer_button = event.button;
        self.pointer_captured = false;

        // Toggle buttons already flipped on the press.
        let mut response = if self.config.is_toggle() {
            Response::NONE
        } else {
            self.pressed = false;
            Response::repaint()
        };
        // Primary releases arrive again as taps.
        if event.button != PRIMARY_BUTTON {
            response = response.with_activation(Activation::for_release(event.button));
        }
        trace!(button = ?event.button, "picture button mouse up");
        response
    }
}

impl Hoverable for ButtonState {
    fn mouse_out(&mut self) -> Response {
        if !self.enabled || !self.pointer_captured {
            return Response::NONE;
        }
        self.pointer_captured = false;
        if !self.config.is_toggle() && self.pressed {
            self.pressed = false;
            trace!("pointer left a held picture button");
            return Response::repaint();
        }
        Response::NONE
    }
}

impl Tappable for ButtonState {
    fn tapped(&mut self) -> Response {
        if self.operable_by(PRIMARY_BUTTON) {
            Response::activate(Activation::Primary)
        } else {
            Response::NONE
        }
    }
}

impl Focusable for ButtonState {
    fn focus_gained(&mut self) -> Response {
        Response::repaint()
    }

    fn focus_lost(&mut self) -> Response {
        Response::repaint()
    }

    fn typed_key(&mut self, key: &KbKey) -> Response {
        let activates = match key {
            KbKey::Enter => true,
            KbKey::Character(c) => c == " ",
            _ => false,
        };
        if !activates || !self.operable_by(PRIMARY_BUTTON) {
            return Response::NONE;
        }
        let mut response = Response::activate(Activation::Primary);
        if self.config.is_toggle() {
            self.pressed = !self.pressed;
            response = Response::repaint().with_activation(Activation::Primary);
        }
        response
    }
}

impl Cursorable for ButtonState {
    fn cursor(&self) -> Cursor {
        if self.enabled {
            Cursor::Pointer
        } else {
            Cursor::Arrow
        }
    }
}
