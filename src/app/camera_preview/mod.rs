// SPDX-License-Identifier: GPL-3.0-only

//! Camera preview card
//!
//! There is no live camera: the preview is a black placeholder. The
//! detection overlay and the busy spinner are layered on top of it and
//! follow the registry's visibility flags.

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::layout;
use crate::station::styles::{Rgb, StyleName};
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Build the camera card with preview, overlay and spinner
    pub fn build_camera_preview(&self) -> Element<'_, Message> {
        let registry = self.station.registry();
        let scan = &self.station.refs().scan;

        let placeholder = widget::container(
            widget::text(registry.text(scan.preview_label))
                .size(14)
                .class(cosmic::theme::Text::Color(style::color(Rgb::WHITE))),
        )
        .width(Length::Fixed(layout::PREVIEW_WIDTH))
        .height(Length::Fixed(layout::PREVIEW_HEIGHT))
        .center_x(Length::Fixed(layout::PREVIEW_WIDTH))
        .center_y(Length::Fixed(layout::PREVIEW_HEIGHT))
        .style(style::solid(Rgb::BLACK));

        let mut layers: Vec<Element<'_, Message>> = vec![placeholder.into()];
        if registry.is_visible(scan.overlay) {
            layers.push(self.build_detection_overlay());
        }
        if registry.is_visible(scan.spinner) {
            layers.push(Self::build_spinner());
        }

        let preview = cosmic::iced::widget::Stack::with_children(layers)
            .width(Length::Fixed(layout::PREVIEW_WIDTH))
            .height(Length::Fixed(layout::PREVIEW_HEIGHT));

        widget::container(preview)
            .width(Length::Fixed(layout::CAMERA_CARD_WIDTH))
            .height(Length::Fixed(layout::CAMERA_CARD_HEIGHT))
            .center_x(Length::Fixed(layout::CAMERA_CARD_WIDTH))
            .center_y(Length::Fixed(layout::CAMERA_CARD_HEIGHT))
            .style(style::named(self.station.styles(), StyleName::Card))
            .into()
    }

    /// Three outlined boxes where text was "found"
    fn build_detection_overlay(&self) -> Element<'_, Message> {
        let registry = self.station.registry();
        let styles = self.station.styles();
        let gap = layout::DETECTION_BOX_STRIDE - layout::DETECTION_BOX_WIDTH;

        let boxes = registry
            .children(self.station.refs().scan.overlay)
            .iter()
            .filter(|id| registry.is_visible(**id))
            .fold(widget::row().spacing(gap), |row, _| {
                row.push(
                    widget::container(widget::Space::new(
                        Length::Fixed(layout::DETECTION_BOX_WIDTH),
                        Length::Fixed(layout::DETECTION_BOX_HEIGHT),
                    ))
                    .style(style::named(styles, StyleName::DetectionBox)),
                )
            });

        widget::container(boxes)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(cosmic::iced::Padding {
                top: layout::DETECTION_BOX_Y,
                left: layout::DETECTION_BOX_X,
                ..cosmic::iced::Padding::ZERO
            })
            .into()
    }

    /// Busy indicator shown while the frame is captured and read
    fn build_spinner() -> Element<'static, Message> {
        let ring = widget::container(
            widget::text("OCR…")
                .size(14)
                .class(cosmic::theme::Text::Color(style::color(Rgb::WHITE))),
        )
        .width(Length::Fixed(layout::SPINNER_SIZE))
        .height(Length::Fixed(layout::SPINNER_SIZE))
        .center_x(Length::Fixed(layout::SPINNER_SIZE))
        .center_y(Length::Fixed(layout::SPINNER_SIZE))
        .style(|_theme| widget::container::Style {
            border: cosmic::iced::Border {
                color: style::color(crate::station::styles::palette::BLUE),
                width: 6.0,
                radius: (layout::SPINNER_SIZE / 2.0).into(),
            },
            ..Default::default()
        });

        widget::container(ring)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into()
    }
}
