// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests driving a [`ButtonState`] through whole pointer and keyboard
//! interactions, routed the way [`PicButton`](crate::PicButton) routes
//! Druid events.

use druid::{KbKey, Modifiers, MouseButton, MouseButtons};

use super::helpers::*;
use crate::image_set::ImageSlot;
use crate::input::{Activation, Focusable, Hoverable, Mouseable, PointerEvent, Response};
use crate::state::{ButtonConfig, ButtonState};
use crate::widget::{release, ActivePress};

/// Stands in for the widget tree: tracks hot the way Druid does, tracks the
/// active press the way the widget does and records every activation.
struct Sim {
    state: ButtonState,
    hot: bool,
    press: ActivePress,
    activations: Vec<Activation>,
    repaints: usize,
}

impl Sim {
    fn new(state: ButtonState) -> Sim {
        Sim {
            state,
            hot: true,
            press: ActivePress::default(),
            activations: Vec::new(),
            repaints: 0,
        }
    }

    fn record(&mut self, response: Response) {
        if response.needs_paint() {
            self.repaints += 1;
        }
        self.activations.extend(response.activation());
    }

    fn down(&mut self, event: PointerEvent) {
        let response = self.state.mouse_down(&event);
        if !response.is_empty() {
            self.press.begin(event.button);
        }
        self.record(response);
    }

    fn up(&mut self, event: PointerEvent) {
        let pressed_here = self.press.end(event.button);
        let response = release(&mut self.state, &event, self.hot, pressed_here);
        self.record(response);
    }

    fn click(&mut self, button: MouseButton) {
        self.down(press(button));
        self.up(press(button));
    }

    fn leave(&mut self) {
        self.hot = false;
        let response = self.state.mouse_out();
        self.record(response);
    }

    fn enter(&mut self) {
        self.hot = true;
        let response = self.state.mouse_in();
        self.record(response);
    }

    fn key(&mut self, key: KbKey) {
        let response = self.state.typed_key(&key);
        self.record(response);
    }
}

#[test]
fn construction_starts_enabled_and_up() {
    for config in [ButtonConfig::momentary(), ButtonConfig::toggle()] {
        let state = state_with(config);
        assert!(state.is_enabled());
        assert!(!state.is_pressed());
    }
}

#[test]
fn momentary_primary_click_activates_once() {
    let mut sim = Sim::new(momentary_state());
    sim.down(press(MouseButton::Left));
    assert!(sim.state.is_pressed());
    assert_eq!(sim.state.displayed_slot(), ImageSlot::Down);

    sim.up(press(MouseButton::Left));
    assert_eq!(sim.activations, vec![Activation::Primary]);
    assert!(!sim.state.is_pressed());
    assert_eq!(sim.state.displayed_slot(), ImageSlot::Up);
}

#[test_log::test]
fn momentary_non_primary_click_activates_once() {
    let config = ButtonConfig::momentary().with_accepted_buttons(all_buttons());
    for (button, expected) in [
        (MouseButton::Right, Activation::Secondary),
        (MouseButton::Middle, Activation::Primary),
    ] {
        let mut sim = Sim::new(state_with(config));
        sim.click(button);
        assert_eq!(sim.activations, vec![expected], "{:?}", button);
        assert!(!sim.state.is_pressed());
        assert_eq!(sim.state.last_pointer_button(), button);
    }
}

#[test]
fn unaccepted_buttons_are_ignored() {
    let mut sim = Sim::new(momentary_state());
    sim.click(MouseButton::Right);
    sim.click(MouseButton::Middle);
    assert!(sim.activations.is_empty());
    assert_eq!(sim.repaints, 0);
    assert_eq!(sim.state.last_pointer_button(), MouseButton::None);
}

#[test]
fn secondary_only_mask_never_taps() {
    let config = ButtonConfig::momentary()
        .with_accepted_buttons(MouseButtons::new().with(MouseButton::Right));
    let mut sim = Sim::new(state_with(config));
    sim.click(MouseButton::Left);
    assert!(sim.activations.is_empty());

    sim.click(MouseButton::Right);
    assert_eq!(sim.activations, vec![Activation::Secondary]);
}

#[test]
fn chorded_release_keeps_the_tap() {
    let mut sim = Sim::new(momentary_state());
    sim.down(press(MouseButton::Left));
    sim.down(press(MouseButton::Right));
    sim.up(press(MouseButton::Right));
    assert!(sim.activations.is_empty());
    assert!(sim.state.is_pressed());

    sim.up(press(MouseButton::Left));
    assert_eq!(sim.activations, vec![Activation::Primary]);
    assert!(!sim.state.is_pressed());
}

#[test]
fn chorded_accepted_buttons_activate_once_each() {
    let config = ButtonConfig::momentary().with_accepted_buttons(all_buttons());
    let mut sim = Sim::new(state_with(config));
    sim.down(press(MouseButton::Left));
    sim.down(press(MouseButton::Right));
    sim.up(press(MouseButton::Right));
    sim.up(press(MouseButton::Left));
    assert_eq!(
        sim.activations,
        vec![Activation::Secondary, Activation::Primary]
    );
}

#[test]
fn toggle_parity() {
    for n in 0..6 {
        let mut sim = Sim::new(toggle_state());
        for _ in 0..n {
            sim.click(MouseButton::Left);
        }
        assert_eq!(sim.state.is_pressed(), n % 2 == 1, "after {} clicks", n);
        assert_eq!(sim.activations.len(), n);
    }
}

#[test]
fn toggle_flips_on_press_not_release() {
    let mut sim = Sim::new(toggle_state());
    sim.down(press(MouseButton::Left));
    assert!(sim.state.is_pressed());
    let repaints = sim.repaints;
    sim.up(press(MouseButton::Left));
    assert!(sim.state.is_pressed());
    assert_eq!(sim.repaints, repaints);
}

#[test]
fn momentary_drag_out_resets_once() {
    let mut sim = Sim::new(momentary_state());
    sim.down(press(MouseButton::Left));
    let repaints = sim.repaints;

    sim.leave();
    assert!(!sim.state.is_pressed());
    assert!(!sim.state.is_pointer_captured());
    assert_eq!(sim.repaints, repaints + 1);

    sim.enter();
    sim.leave();
    assert_eq!(sim.repaints, repaints + 1);

    // releasing outside the button does nothing
    sim.up(press(MouseButton::Left));
    assert!(sim.activations.is_empty());
}

#[test]
fn toggle_drag_out_keeps_state() {
    let mut sim = Sim::new(toggle_state());
    sim.down(press(MouseButton::Left));
    sim.leave();
    assert!(sim.state.is_pressed());
    assert!(!sim.state.is_pointer_captured());
    sim.up(press(MouseButton::Left));
    assert!(sim.state.is_pressed());
    assert!(sim.activations.is_empty());
}

#[test]
fn disabled_button_ignores_the_pointer() {
    let mut sim = Sim::new(state_with(
        ButtonConfig::momentary().with_accepted_buttons(all_buttons()),
    ));
    sim.state.set_enabled(false);
    for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
        sim.click(button);
    }
    sim.leave();
    assert!(sim.activations.is_empty());
    assert_eq!(sim.repaints, 0);
    assert!(!sim.state.is_pressed());
    assert!(!sim.state.is_pointer_captured());
    assert_eq!(sim.state.last_pointer_button(), MouseButton::None);
    assert_eq!(sim.state.last_modifier_key(), Modifiers::empty());
}

#[test]
fn disabling_a_pressed_button_shows_disabled_down() {
    let mut sim = Sim::new(toggle_state());
    sim.click(MouseButton::Left);
    sim.state.set_enabled(false);
    assert_eq!(sim.state.displayed_slot(), ImageSlot::DisabledDown);
    let down = sim.state.images().get(ImageSlot::Down);
    assert_ne!(sim.state.displayed_image().encoded(), down.encoded());

    sim.state.set_enabled(true);
    assert!(sim.state.is_pressed());
    assert_eq!(sim.state.displayed_slot(), ImageSlot::Down);
}

#[test]
fn release_records_modifiers() {
    let config = ButtonConfig::toggle().with_accepted_buttons(all_buttons());
    let mut sim = Sim::new(state_with(config));
    sim.down(press(MouseButton::Right));
    sim.up(press_with(MouseButton::Right, Modifiers::SHIFT | Modifiers::CONTROL));
    assert_eq!(sim.state.last_pointer_button(), MouseButton::Right);
    assert_eq!(
        sim.state.last_modifier_key(),
        Modifiers::SHIFT | Modifiers::CONTROL
    );
}

#[test_log::test]
fn keyboard_activation() {
    let mut sim = Sim::new(toggle_state());
    sim.key(KbKey::Enter);
    assert!(sim.state.is_pressed());
    sim.key(KbKey::Character(" ".into()));
    assert!(!sim.state.is_pressed());
    sim.key(KbKey::Character("a".into()));
    sim.key(KbKey::Tab);
    assert_eq!(sim.activations, vec![Activation::Primary, Activation::Primary]);

    let mut sim = Sim::new(momentary_state());
    sim.key(KbKey::Enter);
    assert!(!sim.state.is_pressed());
    assert_eq!(sim.activations, vec![Activation::Primary]);
}

#[test]
fn keyboard_needs_the_primary_button() {
    let config =
        ButtonConfig::toggle().with_accepted_buttons(MouseButtons::new().with(MouseButton::Right));
    let mut sim = Sim::new(state_with(config));
    sim.key(KbKey::Enter);
    assert!(!sim.state.is_pressed());
    assert!(sim.activations.is_empty());

    let mut sim = Sim::new(toggle_state());
    sim.state.set_enabled(false);
    sim.key(KbKey::Enter);
    assert!(sim.activations.is_empty());
}

#[test]
fn synthesized_disabled_up_follows_the_up_image() {
    let mut state = momentary_state();
    let red = solid_png(24, 16, [255, 0, 0, 255]);
    let _ = state.set_up_image(&red).unwrap();
    let expected = crate::grayscale_png(&red).unwrap();
    assert_eq!(
        state.images().get(ImageSlot::DisabledUp).encoded(),
        &expected[..]
    );
}

#[test]
fn explicit_disabled_up_is_kept_until_cleared() {
    let mut state = momentary_state();
    let explicit = solid_png(24, 16, [0, 255, 0, 255]);
    let _ = state.set_disabled_up_image(Some(&explicit[..])).unwrap();

    let _ = state.set_up_image(&solid_png(24, 16, [255, 0, 0, 255])).unwrap();
    assert_eq!(
        state.images().get(ImageSlot::DisabledUp).encoded(),
        &explicit[..]
    );

    let _ = state.set_disabled_up_image(None).unwrap();
    let blue = solid_png(24, 16, [0, 0, 255, 255]);
    let _ = state.set_up_image(&blue).unwrap();
    assert_eq!(
        state.images().get(ImageSlot::DisabledUp).encoded(),
        &crate::grayscale_png(&blue).unwrap()[..]
    );
}

#[test]
fn failed_replacements_change_nothing() {
    let mut state = toggle_state();
    let revision = state.images().revision();
    let before: Vec<Vec<u8>> = ImageSlot::ALL
        .iter()
        .map(|slot| state.images().get(*slot).encoded().to_vec())
        .collect();

    assert!(state.set_up_image(&[]).is_err());
    assert!(state.set_down_image(b"not an image").is_err());
    assert!(state.set_disabled_up_image(Some(&[][..])).is_err());
    assert!(state.set_disabled_down_image(Some(&b"junk"[..])).is_err());

    assert_eq!(state.images().revision(), revision);
    for (slot, bytes) in ImageSlot::ALL.iter().zip(&before) {
        assert_eq!(state.images().get(*slot).encoded(), &bytes[..], "{}", slot);
    }
}
