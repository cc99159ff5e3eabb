// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A button drawn entirely from user supplied images.

use druid::widget::prelude::*;
use druid::{Command, KbKey, MouseButton, Selector};
use tracing::{instrument, trace, warn};

use crate::error::Result;
use crate::image_set::ImageSlot;
use crate::input::{
    Activation, Cursorable, Focusable, Hoverable, Mouseable, PointerEvent, Response, Tappable,
    PRIMARY_BUTTON,
};
use crate::state::{ButtonConfig, ButtonState};
use crate::widget::renderer::Renderer;

/// Press (`true`) or release (`false`) the button without activating it.
pub const SET_PRESSED: Selector<bool> = Selector::new("druid-picbutton.set-pressed");

/// Enable or disable the button.
pub const SET_ENABLED: Selector<bool> = Selector::new("druid-picbutton.set-enabled");

/// Override the minimum size derived from the up image.
pub const SET_MIN_SIZE: Selector<Size> = Selector::new("druid-picbutton.set-min-size");

/// Replace the up image with encoded image bytes.
pub const SET_UP_IMAGE: Selector<Vec<u8>> = Selector::new("druid-picbutton.set-up-image");

/// Replace the down image with encoded image bytes.
pub const SET_DOWN_IMAGE: Selector<Vec<u8>> = Selector::new("druid-picbutton.set-down-image");

/// Replace the disabled-up image; `None` synthesizes it from the up image.
pub const SET_DISABLED_UP_IMAGE: Selector<Option<Vec<u8>>> =
    Selector::new("druid-picbutton.set-disabled-up-image");

/// Replace the disabled-down image; `None` synthesizes it from the down image.
pub const SET_DISABLED_DOWN_IMAGE: Selector<Option<Vec<u8>>> =
    Selector::new("druid-picbutton.set-disabled-down-image");

/// The signature of a [`PicButton`] callback.
///
/// The callback gets the button's state so it can ask which pointer button
/// and modifiers activated it, and whether a toggle button is now down.
pub type ActionFn<T> = dyn Fn(&mut EventCtx, &ButtonState, &mut T, &Env);

/// A push or toggle button that displays one of four images.
///
/// The up and down images are shown while the button is enabled, the
/// disabled-up and disabled-down images while it is disabled. Disabled
/// images that are not supplied are generated in grayscale.
///
/// Once the button is part of a widget tree, control it by submitting the
/// commands of this module ([`SET_ENABLED`], [`SET_UP_IMAGE`], ...) to its
/// [`WidgetId`].
///
/// # Examples
///
/// ```no_run
/// use druid::{MouseButton, MouseButtons};
/// use druid_picbutton::{ButtonConfig, ButtonState, PicButton};
///
/// # fn icons() -> (Vec<u8>, Vec<u8>) { unimplemented!() }
/// let (up, down) = icons();
/// let config = ButtonConfig::toggle()
///     .with_accepted_buttons(MouseButtons::new().with(MouseButton::Left).with(MouseButton::Right));
/// let state = ButtonState::new(&up, &down, None, None, config)?;
/// let button = PicButton::new(state)
///     .on_click(|_ctx, state: &ButtonState, count: &mut u32, _env| {
///         if state.is_pressed() {
///             *count += 1;
///         }
///     })
///     .on_secondary_click(|_ctx, _state, count: &mut u32, _env| *count = 0);
/// # Ok::<(), druid_picbutton::Error>(())
/// ```
pub struct PicButton<T> {
    state: ButtonState,
    renderer: Renderer,
    press: ActivePress,
    on_click: Option<Box<ActionFn<T>>>,
    on_secondary_click: Option<Box<ActionFn<T>>>,
}

impl<T: Data> PicButton<T> {
    /// Create a button around `state`, with no callbacks.
    pub fn new(state: ButtonState) -> PicButton<T> {
        PicButton {
            renderer: Renderer::new(&state),
            state,
            press: ActivePress::default(),
            on_click: None,
            on_secondary_click: None,
        }
    }

    /// Create a push button operated by the primary pointer button, with
    /// synthesized disabled images.
    pub fn from_images(up: &[u8], down: &[u8]) -> Result<PicButton<T>> {
        let state = ButtonState::new(up, down, None, None, ButtonConfig::momentary())?;
        Ok(PicButton::new(state))
    }

    /// Builder-style method for the primary callback.
    ///
    /// It runs on taps with the primary pointer button, on Enter or Space
    /// while focused, and on releases of accepted buttons other than the
    /// primary and secondary ones. It also handles secondary releases when
    /// no secondary callback is set.
    pub fn on_click(
        mut self,
        f: impl Fn(&mut EventCtx, &ButtonState, &mut T, &Env) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Builder-style method for the secondary callback, run on releases of
    /// the secondary pointer button when it is accepted.
    pub fn on_secondary_click(
        mut self,
        f: impl Fn(&mut EventCtx, &ButtonState, &mut T, &Env) + 'static,
    ) -> Self {
        self.on_secondary_click = Some(Box::new(f));
        self
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    /// Mutable access to the state.
    ///
    /// Changes made here are picked up on the next paint; callers inside a
    /// running tree must request paint or layout themselves.
    pub fn state_mut(&mut self) -> &mut ButtonState {
        &mut self.state
    }

    fn apply(&self, ctx: &mut EventCtx, response: Response, data: &mut T, env: &Env) {
        if response.needs_layout() {
            ctx.request_layout();
        }
        if response.needs_paint() {
            ctx.request_paint();
        }
        let action = match response.activation().and_then(|a| self.callback_for(a)) {
            Some(Activation::Primary) => self.on_click.as_ref(),
            Some(Activation::Secondary) => self.on_secondary_click.as_ref(),
            None => None,
        };
        if let Some(action) = action {
            trace!(activation = ?response.activation(), "PicButton activated");
            (action)(ctx, &self.state, data, env);
        }
    }

    /// Which callback handles `activation`. Secondary activations fall back
    /// to the primary callback.
    fn callback_for(&self, activation: Activation) -> Option<Activation> {
        match activation {
            Activation::Secondary if self.on_secondary_click.is_some() => {
                Some(Activation::Secondary)
            }
            _ if self.on_click.is_some() => Some(Activation::Primary),
            _ => None,
        }
    }

    /// Apply one of this module's commands to the state. Returns `None` for
    /// commands the button does not handle.
    fn command(&mut self, cmd: &Command) -> Option<Response> {
        let response = if let Some(pressed) = cmd.get(SET_PRESSED) {
            changed(self.state.set_pressed(*pressed))
        } else if let Some(enabled) = cmd.get(SET_ENABLED) {
            changed(self.state.set_enabled(*enabled))
        } else if let Some(size) = cmd.get(SET_MIN_SIZE) {
            self.state.set_min_size(*size)
        } else if let Some(bytes) = cmd.get(SET_UP_IMAGE) {
            accepted(ImageSlot::Up, self.state.set_up_image(bytes))
        } else if let Some(bytes) = cmd.get(SET_DOWN_IMAGE) {
            accepted(ImageSlot::Down, self.state.set_down_image(bytes))
        } else if let Some(bytes) = cmd.get(SET_DISABLED_UP_IMAGE) {
            accepted(
                ImageSlot::DisabledUp,
                self.state.set_disabled_up_image(bytes.as_deref()),
            )
        } else if let Some(bytes) = cmd.get(SET_DISABLED_DOWN_IMAGE) {
            accepted(
                ImageSlot::DisabledDown,
                self.state.set_disabled_down_image(bytes.as_deref()),
            )
        } else {
            return None;
        };
        Some(response)
    }
}

fn changed(changed: bool) -> Response {
    if changed {
        Response::repaint()
    } else {
        Response::NONE
    }
}

fn accepted(slot: ImageSlot, result: Result<Response>) -> Response {
    result.unwrap_or_else(|err| {
        warn!("PicButton kept its {} image: {}", slot, err);
        Response::NONE
    })
}

/// Remembers which pointer button made the widget active, so releasing
/// another button during a chorded press leaves the press alone.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ActivePress {
    button: Option<MouseButton>,
}

impl ActivePress {
    /// Record an accepted press. Returns `true` if the widget just became
    /// active.
    pub fn begin(&mut self, button: MouseButton) -> bool {
        if self.button.is_some() {
            return false;
        }
        self.button = Some(button);
        true
    }

    /// Record a release. Returns `true` if it ends the press that made the
    /// widget active.
    pub fn end(&mut self, button: MouseButton) -> bool {
        if self.button != Some(button) {
            return false;
        }
        self.button = None;
        true
    }
}

/// Route a pointer release the way the toolkit does: the raw release goes
/// to [`Mouseable::mouse_up`] when the pointer is over the button, and a
/// primary release that ends a press on the button is then also a tap.
pub(crate) fn release(
    state: &mut ButtonState,
    event: &PointerEvent,
    inside: bool,
    pressed_here: bool,
) -> Response {
    if !inside {
        return Response::NONE;
    }
    let response = state.mouse_up(event);
    if pressed_here && event.button == PRIMARY_BUTTON {
        response.merge(state.tapped())
    } else {
        response
    }
}

impl<T: Data> Widget<T> for PicButton<T> {
    #[instrument(name = "PicButton", level = "trace", skip(self, ctx, event, data, env))]
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        let response = match event {
            Event::MouseDown(mouse) => {
                let response = self.state.mouse_down(&PointerEvent::from(mouse));
                if !response.is_empty() {
                    if self.press.begin(mouse.button) {
                        ctx.set_active(true);
                    }
                    ctx.request_focus();
                }
                response
            }
            Event::MouseUp(mouse) => {
                let pressed_here = self.press.end(mouse.button);
                if pressed_here {
                    ctx.set_active(false);
                }
                release(
                    &mut self.state,
                    &PointerEvent::from(mouse),
                    ctx.is_hot(),
                    pressed_here,
                )
            }
            Event::MouseMove(mouse) => {
                ctx.set_cursor(&self.state.cursor());
                self.state.mouse_moved(&PointerEvent::from(mouse))
            }
            Event::KeyDown(key) if ctx.is_focused() => {
                let mut response = self.state.typed_key(&key.key);
                if let KbKey::Character(text) = &key.key {
                    for rune in text.chars() {
                        response = response.merge(self.state.typed_rune(rune));
                    }
                }
                if response.activation().is_some() {
                    ctx.set_handled();
                }
                response
            }
            Event::Command(cmd) => match self.command(cmd) {
                Some(response) => {
                    if cmd.is(SET_ENABLED) {
                        ctx.set_cursor(&self.state.cursor());
                    }
                    ctx.set_handled();
                    response
                }
                None => return,
            },
            _ => return,
        };
        self.apply(ctx, response, data, env);
    }

    #[instrument(name = "PicButton", level = "trace", skip(self, ctx, event, _data, _env))]
    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        let response = match event {
            LifeCycle::HotChanged(true) => self.state.mouse_in(),
            LifeCycle::HotChanged(false) => self.state.mouse_out(),
            LifeCycle::FocusChanged(true) => self.state.focus_gained(),
            LifeCycle::FocusChanged(false) => self.state.focus_lost(),
            LifeCycle::BuildFocusChain => {
                ctx.register_for_focus();
                Response::NONE
            }
            LifeCycle::DisabledChanged(disabled) => changed(self.state.set_enabled(!disabled)),
            _ => Response::NONE,
        };
        if response.needs_layout() {
            ctx.request_layout();
        }
        if response.needs_paint() {
            ctx.request_paint();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    #[instrument(name = "PicButton", level = "trace", skip(self, ctx, bc, data, env))]
    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        bc.debug_check("PicButton");

        let size = bc.constrain(self.state.min_size());
        self.renderer.layout(ctx, size, data, env);
        trace!("Computed size: {}", size);
        size
    }

    #[instrument(name = "PicButton", level = "trace", skip(self, ctx, data, env))]
    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.renderer.sync(&self.state);
        self.renderer.paint(ctx, data, env);
    }
}
