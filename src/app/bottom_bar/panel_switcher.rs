// SPDX-License-Identifier: GPL-3.0-only

//! Panel switcher (SCAN / FIELDS / SETTINGS)

use crate::app::state::{AppModel, Message};
use crate::constants::layout;
use crate::station::ScreenId;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the panel switcher widget
    ///
    /// The checked nav button is highlighted with a suggested button style.
    pub fn build_panel_switcher(&self) -> Element<'_, Message> {
        let registry = self.station.registry();
        let panels = &self.station.refs().panels;

        ScreenId::ALL
            .into_iter()
            .fold(
                widget::row().spacing(layout::NAV_BUTTON_GAP),
                |row, screen| {
                    let id = panels.nav_button(screen);
                    let button = widget::button::text(registry.text(id))
                        .on_press(Message::navigate(screen))
                        .width(Length::Fixed(layout::NAV_BUTTON_WIDTH))
                        .height(Length::Fixed(layout::NAV_BUTTON_HEIGHT))
                        .class(if registry.is_checked(id) {
                            cosmic::theme::Button::Suggested
                        } else {
                            cosmic::theme::Button::Text
                        });
                    row.push(button)
                },
            )
            .into()
    }
}
