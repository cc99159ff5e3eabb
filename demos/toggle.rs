// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! A toggle picture button reporting how it was clicked.
//!
//! Left clicks, Enter and Space toggle the button. Right clicks toggle it
//! too and also grow it, using the secondary callback.

// On Windows platform, don't show a console when opening the app.
#![windows_subsystem = "windows"]

#[allow(dead_code)]
mod icons;

use druid::widget::{Flex, Label};
use druid::{
    AppLauncher, MouseButton, MouseButtons, Size, Widget, WidgetExt, WidgetId, WindowDesc,
};
use druid_picbutton::widget::SET_MIN_SIZE;
use druid_picbutton::{ButtonConfig, ButtonState, PicButton};

use icons::{icon, Glyph, DOWN, SIZE, UP};

const BUTTON: WidgetId = WidgetId::reserved(1);

fn describe(state: &ButtonState) -> String {
    format!(
        "{} ({:?}, {:?})",
        if state.is_pressed() { "on" } else { "off" },
        state.last_pointer_button(),
        state.last_modifier_key()
    )
}

fn build_ui() -> Result<impl Widget<String>, Box<dyn std::error::Error>> {
    let state = ButtonState::new(
        &icon(Glyph::Play, UP)?,
        &icon(Glyph::Play, DOWN)?,
        None,
        None,
        ButtonConfig::toggle().with_accepted_buttons(
            MouseButtons::new()
                .with(MouseButton::Left)
                .with(MouseButton::Right),
        ),
    )?;
    let button = PicButton::new(state)
        .on_click(|_ctx, state, status: &mut String, _env| *status = describe(state))
        .on_secondary_click(|ctx, state, status: &mut String, _env| {
            *status = describe(state);
            let grown = state.min_size() + Size::new(8.0, 8.0);
            ctx.submit_command(SET_MIN_SIZE.with(grown).to(BUTTON));
        });

    Ok(Flex::column()
        .with_child(button.with_id(BUTTON))
        .with_spacer(8.0)
        .with_child(Label::dynamic(|status: &String, _| status.clone()))
        .padding(8.0))
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initial = format!("off, {}x{} pixels", SIZE, SIZE);
    let window = WindowDesc::new(build_ui()?)
        .title("PicButton toggle")
        .window_size((240.0, 160.0));
    AppLauncher::with_window(window)
        .log_to_console()
        .launch(initial)?;
    Ok(())
}
