// SPDX-License-Identifier: GPL-3.0-only

//! Settings panel view

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::config::AppTheme;
use crate::constants::{app_info, layout};
use crate::station::StationEvent;
use crate::station::styles::StyleName;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Create the settings panel
    ///
    /// Shows the brightness slider, restart button, theme selection and
    /// version information.
    pub fn build_settings_panel(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let registry = self.station.registry();
        let refs = &self.station.refs().settings;

        let brightness = registry.value(refs.brightness);
        let slider = widget::slider(0.0..=100.0, brightness as f32, |v| {
            Message::Station(StationEvent::BrightnessChanged(v.round() as u8))
        })
        .width(Length::Fixed(layout::BRIGHTNESS_SLIDER_WIDTH));

        let restart_button = widget::button::destructive(registry.text(refs.restart))
            .on_press(Message::Station(StationEvent::RestartRequested));

        let device_column = widget::column()
            .push(Self::caption(crate::constants::text::DEVICE))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::row()
                    .push(widget::text(registry.text(refs.brightness)).size(14))
                    .push(widget::horizontal_space().width(Length::Fill))
                    .push(widget::text(format!("{}%", brightness)).size(14)),
            )
            .push(slider)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(restart_button)
            .spacing(spacing.space_xxs);

        // Theme dropdown
        let current_theme_index = AppTheme::ALL
            .iter()
            .position(|t| *t == self.config.app_theme)
            .unwrap_or(0);
        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(current_theme_index),
            Message::SetAppTheme,
        );

        // Version info string
        let version_info = if app_info::is_flatpak() {
            format!("{} (Flatpak)", registry.text(refs.version))
        } else {
            registry.text(refs.version).to_string()
        };

        let station_column = widget::column()
            .push(Self::caption(crate::constants::text::STATION))
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text("Appearance").size(14))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(spacing.space_xxs);

        widget::row()
            .push(self.settings_card(device_column.into()))
            .push(self.settings_card(station_column.into()))
            .spacing(spacing.space_m)
            .into()
    }

    fn settings_card<'a>(&self, content: Element<'a, Message>) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();
        widget::container(content)
            .width(Length::Fixed(layout::SETTINGS_CARD_WIDTH))
            .height(Length::Fixed(layout::SETTINGS_CARD_HEIGHT))
            .padding(spacing.space_m)
            .style(style::named(self.station.styles(), StyleName::Card))
            .into()
    }
}
