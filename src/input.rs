// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Input capabilities of a picture button, independent of any widget tree.
//!
//! Each trait mirrors one kind of input a toolkit can deliver: taps, raw
//! pointer presses, hover, cursor queries and keyboard focus. Every handler
//! returns a [`Response`] describing what the host has to do next.

use druid::{Cursor, KbKey, Modifiers, MouseButton, MouseEvent, Point};

/// The button whose presses the toolkit reports as taps.
pub const PRIMARY_BUTTON: MouseButton = MouseButton::Left;

/// The button that triggers the secondary activation.
pub const SECONDARY_BUTTON: MouseButton = MouseButton::Right;

/// The parts of a pointer event a button cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The button that was pressed or released.
    pub button: MouseButton,
    /// Keyboard modifiers held during the event.
    pub mods: Modifiers,
    /// Position in the button's coordinate space.
    pub pos: Point,
}

impl PointerEvent {
    /// An event for `button` at the origin with no modifiers.
    pub fn new(button: MouseButton) -> PointerEvent {
        PointerEvent {
            button,
            mods: Modifiers::empty(),
            pos: Point::ORIGIN,
        }
    }

    /// Builder-style method for setting the modifiers.
    pub fn with_mods(mut self, mods: Modifiers) -> PointerEvent {
        self.mods = mods;
        self
    }
}

impl From<&MouseEvent> for PointerEvent {
    fn from(src: &MouseEvent) -> PointerEvent {
        PointerEvent {
            button: src.button,
            mods: src.mods,
            pos: src.pos,
        }
    }
}

/// Which user callback an interaction activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Taps, keyboard activation and releases of buttons other than the
    /// secondary one.
    Primary,
    /// Releases of [`SECONDARY_BUTTON`].
    Secondary,
}

impl Activation {
    /// The activation caused by releasing `button`.
    pub fn for_release(button: MouseButton) -> Activation {
        if button == SECONDARY_BUTTON {
            Activation::Secondary
        } else {
            Activation::Primary
        }
    }
}

/// What an input handler asks of its host.
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    paint: bool,
    layout: bool,
    activation: Option<Activation>,
}

impl Response {
    /// Nothing to do.
    pub const NONE: Response = Response {
        paint: false,
        layout: false,
        activation: None,
    };

    /// The displayed image may have changed.
    pub fn repaint() -> Response {
        Response {
            paint: true,
            ..Response::NONE
        }
    }

    /// The minimum size changed.
    pub fn relayout() -> Response {
        Response {
            paint: true,
            layout: true,
            activation: None,
        }
    }

    /// The interaction activated the button.
    pub fn activate(activation: Activation) -> Response {
        Response {
            activation: Some(activation),
            ..Response::NONE
        }
    }

    /// Builder-style method for adding an activation.
    pub fn with_activation(mut self, activation: Activation) -> Response {
        self.activation = Some(activation);
        self
    }

    /// Combine two responses; the activation of `other` wins if it has one.
    pub fn merge(self, other: Response) -> Response {
        Response {
            paint: self.paint || other.paint,
            layout: self.layout || other.layout,
            activation: other.activation.or(self.activation),
        }
    }

    /// Returns `true` if the host should repaint.
    pub fn needs_paint(&self) -> bool {
        self.paint
    }

    /// Returns `true` if the host should lay the button out again.
    pub fn needs_layout(&self) -> bool {
        self.layout
    }

    /// The callback to invoke, if any.
    pub fn activation(&self) -> Option<Activation> {
        self.activation
    }

    /// Returns `true` if nothing needs to happen.
    pub fn is_empty(&self) -> bool {
        *self == Response::NONE
    }
}

/// Receives taps: a press and release of [`PRIMARY_BUTTON`] on the same
/// widget, as recognized by the toolkit.
pub trait Tappable {
    fn tapped(&mut self) -> Response;
}

/// Receives raw pointer presses and releases of any button.
pub trait Mouseable {
    fn mouse_down(&mut self, event: &PointerEvent) -> Response;
    fn mouse_up(&mut self, event: &PointerEvent) -> Response;
}

/// Receives pointer enter, move and leave notifications.
pub trait Hoverable {
    fn mouse_in(&mut self) -> Response {
        Response::NONE
    }

    fn mouse_moved(&mut self, _event: &PointerEvent) -> Response {
        Response::NONE
    }

    fn mouse_out(&mut self) -> Response;
}

/// Chooses the cursor shown over the widget.
pub trait Cursorable {
    fn cursor(&self) -> Cursor;
}

/// Receives keyboard focus changes and key presses while focused.
pub trait Focusable {
    fn focus_gained(&mut self) -> Response;
    fn focus_lost(&mut self) -> Response;
    fn typed_key(&mut self, key: &KbKey) -> Response;

    fn typed_rune(&mut self, _rune: char) -> Response {
        Response::NONE
    }
}
