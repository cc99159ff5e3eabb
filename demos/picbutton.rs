// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A small transport bar made of picture buttons.
//!
//! Play is a toggle button with hand-made disabled images that can be
//! clicked with either the left or the right button. Stop starts disabled
//! and is enabled while play is down; it reacts to the left, right and
//! middle buttons. Clicking stop with Ctrl held swaps play's down image,
//! Shift restores it. The first exit button enables the second one, which
//! quits.

// On Windows platform, don't show a console when opening the app.
#![windows_subsystem = "windows"]

mod icons;

use druid::widget::Flex;
use druid::{
    commands, AppLauncher, Color, EventCtx, Modifiers, MouseButton, MouseButtons, Widget,
    WidgetExt, WidgetId, WindowDesc,
};
use druid_picbutton::widget::{SET_DOWN_IMAGE, SET_ENABLED, SET_PRESSED};
use druid_picbutton::{ButtonConfig, ButtonState, PicButton};
use tracing::info;

use icons::{icon, Glyph, Style, DOWN, UP};

const PLAY: WidgetId = WidgetId::reserved(1);
const STOP: WidgetId = WidgetId::reserved(2);
const EXIT_ONE: WidgetId = WidgetId::reserved(3);
const EXIT_TWO: WidgetId = WidgetId::reserved(4);

const ALT_DOWN: Style = Style {
    ink: [30, 60, 220, 255],
    ..DOWN
};

fn struck(style: Style) -> Style {
    Style {
        struck: true,
        ..style
    }
}

fn play_changed(ctx: &mut EventCtx, state: &ButtonState) {
    info!(
        "Play clicked: {:?} {:?}",
        state.last_modifier_key(),
        state.last_pointer_button()
    );
    ctx.submit_command(SET_ENABLED.with(state.is_pressed()).to(STOP));
}

fn build_ui() -> Result<impl Widget<()>, Box<dyn std::error::Error>> {
    let play_down = icon(Glyph::Play, DOWN)?;
    let alt_down = icon(Glyph::Play, ALT_DOWN)?;

    let play = ButtonState::new(
        &icon(Glyph::Play, UP)?,
        &play_down,
        Some(&icon(Glyph::Play, struck(UP))?[..]),
        Some(&icon(Glyph::Play, struck(DOWN))?[..]),
        ButtonConfig::toggle().with_accepted_buttons(
            MouseButtons::new()
                .with(MouseButton::Left)
                .with(MouseButton::Right),
        ),
    )?;
    let play = PicButton::<()>::new(play)
        .on_click(|ctx, state, _, _| play_changed(ctx, state))
        .on_secondary_click(|ctx, state, _, _| play_changed(ctx, state));

    let mut stop = ButtonState::new(
        &icon(Glyph::Stop, UP)?,
        &icon(Glyph::Stop, DOWN)?,
        None,
        None,
        ButtonConfig::momentary().with_accepted_buttons(
            MouseButtons::new()
                .with(MouseButton::Left)
                .with(MouseButton::Right)
                .with(MouseButton::Middle),
        ),
    )?;
    stop.set_enabled(false);
    let stop = PicButton::<()>::new(stop).on_click(move |ctx, state: &ButtonState, _, _| {
        info!(
            "Stop clicked: {:?} {:?}",
            state.last_modifier_key(),
            state.last_pointer_button()
        );
        let mods = state.last_modifier_key();
        if mods == Modifiers::CONTROL {
            ctx.submit_command(SET_DOWN_IMAGE.with(alt_down.clone()).to(PLAY));
        } else if mods == Modifiers::SHIFT {
            ctx.submit_command(SET_DOWN_IMAGE.with(play_down.clone()).to(PLAY));
        } else {
            ctx.submit_command(SET_PRESSED.with(false).to(PLAY));
            ctx.submit_command(SET_ENABLED.with(false).to(STOP));
        }
    });

    let exit_up = icon(Glyph::Exit, UP)?;
    let exit_down = icon(Glyph::Exit, DOWN)?;
    let exit_one =
        PicButton::<()>::from_images(&exit_up, &exit_down)?.on_click(|ctx, _, _, _| {
            ctx.submit_command(SET_ENABLED.with(true).to(EXIT_TWO));
            ctx.submit_command(SET_ENABLED.with(false).to(EXIT_ONE));
        });
    let mut exit_two = PicButton::<()>::from_images(&exit_up, &exit_down)?
        .on_click(|ctx, _, _, _| ctx.submit_command(commands::QUIT_APP));
    exit_two.state_mut().set_enabled(false);

    Ok(Flex::row()
        .with_child(play.with_id(PLAY))
        .with_child(stop.with_id(STOP))
        .with_child(exit_one.with_id(EXIT_ONE))
        .with_child(exit_two.with_id(EXIT_TWO))
        .padding(4.0)
        .background(Color::grey8(192)))
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let window = WindowDesc::new(build_ui()?)
        .title("PicButton")
        .resizable(false);
    AppLauncher::with_window(window)
        .log_to_console()
        .launch(())?;
    Ok(())
}
