// SPDX-License-Identifier: GPL-3.0-only

//! Control card: camera switch and capture buttons

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::layout;
use crate::station::ScanEvent;
use crate::station::styles::StyleName;
use cosmic::Element;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the control card
    ///
    /// Enablement comes straight from the registry; a disabled button has no
    /// `on_press` and is drawn greyed out.
    pub fn build_control_card(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let registry = self.station.registry();
        let scan = &self.station.refs().scan;

        let camera_switch = widget::row()
            .push(
                widget::toggler(registry.is_checked(scan.camera_switch)).on_toggle(|on| {
                    Message::scan(if on {
                        ScanEvent::CameraToggleOn
                    } else {
                        ScanEvent::CameraToggleOff
                    })
                }),
            )
            .push(widget::text(registry.text(scan.camera_switch)).size(16))
            .spacing(spacing.space_s)
            .align_y(Alignment::Center);

        let retake = widget::button::standard(registry.text(scan.retake_button))
            .on_press_maybe(
                registry
                    .is_enabled(scan.retake_button)
                    .then(|| Message::scan(ScanEvent::RetakeRequested)),
            );
        let clear = widget::button::destructive(registry.text(scan.clear_button)).on_press_maybe(
            registry
                .is_enabled(scan.clear_button)
                .then(|| Message::scan(ScanEvent::ClearRequested)),
        );

        let column = widget::column()
            .push(camera_switch)
            .push(self.build_capture_button())
            .push(
                widget::row()
                    .push(retake)
                    .push(clear)
                    .spacing(spacing.space_s),
            )
            .spacing(spacing.space_s);

        widget::container(column)
            .width(Length::Fixed(layout::CONTROL_CARD_WIDTH))
            .height(Length::Fixed(layout::CONTROL_CARD_HEIGHT))
            .padding(spacing.space_s)
            .style(style::named(self.station.styles(), StyleName::Card))
            .into()
    }

    /// Full-width primary "Capture & OCR" button
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let registry = self.station.registry();
        let scan = &self.station.refs().scan;
        let primary = self.station.styles().get(StyleName::PrimaryButton);
        let is_enabled = registry.is_enabled(scan.capture_button);
        let height = primary.height.unwrap_or(layout::NAV_BUTTON_HEIGHT);

        let mut face = style::container(primary);
        if !is_enabled {
            // Grayed out with low opacity when disabled
            face.background = Some(cosmic::iced::Background::Color(Color::from_rgba(
                0.5, 0.5, 0.5, 0.3,
            )));
        }

        let label = widget::text(registry.text(scan.capture_button))
            .size(primary.text_size.unwrap_or(18))
            .font(cosmic::font::bold());

        let inner = widget::container(label)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(height))
            .style(move |_theme| face.clone());

        widget::button::custom(inner)
            .padding(0)
            .width(Length::Fill)
            .on_press_maybe(is_enabled.then(|| Message::scan(ScanEvent::CaptureRequested)))
            .into()
    }
}
