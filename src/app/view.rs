// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Projects the station's widget registry into libcosmic widgets:
//! - Top bar with titles, status chips and clock (inline)
//! - The visible content panel (scan, fields or settings)
//! - Navigation bar (bottom_bar module)
//! - Toast overlay (inline)

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::station::styles::{StyleName, palette};
use crate::station::{ScreenId, WidgetId};
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;
use std::time::Instant;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let surface = self.station.surface();

        let content = widget::column()
            .push(self.build_top_bar())
            .push(self.build_visible_panel())
            .push(self.build_bottom_bar())
            .width(Length::Fill)
            .height(Length::Fill);

        let base = widget::container(content)
            .width(Length::Fixed(surface.width))
            .height(Length::Fixed(surface.height))
            .style(style::named(self.station.styles(), StyleName::AppBackground));

        match self.build_toasts() {
            Some(toasts) => widget::container(
                cosmic::iced::widget::stack![base, toasts]
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => base.into(),
        }
    }

    /// Status chip as a rounded coloured badge
    pub(crate) fn build_chip(&self, id: WidgetId) -> Element<'_, Message> {
        let registry = self.station.registry();
        widget::container(widget::text(registry.text(id)).size(13))
            .padding([4, 12])
            .style(style::chip(self.station.styles(), registry.tone(id)))
            .into()
    }

    /// Bold label above a control
    pub(crate) fn caption(text: &str) -> Element<'_, Message> {
        widget::text(text).size(16).font(cosmic::font::bold()).into()
    }

    fn build_top_bar(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let registry = self.station.registry();
        let refs = self.station.refs();
        let top = refs.top_bar;

        let titles = widget::column()
            .push(widget::text(registry.text(top.mission_title)).size(12))
            .push(
                widget::text(registry.text(top.station_title))
                    .size(20)
                    .font(cosmic::font::bold()),
            );

        let row = widget::row()
            .push(titles)
            .push(widget::horizontal_space().width(Length::Fill))
            .push(self.build_chip(refs.scan.chip_cam))
            .push(self.build_chip(refs.scan.chip_ocr))
            .push(self.build_chip(top.chip_net))
            .push(widget::horizontal_space().width(spacing.space_m))
            .push(
                widget::text(registry.text(top.clock))
                    .size(20)
                    .font(cosmic::font::bold()),
            )
            .spacing(spacing.space_xs)
            .padding([0, spacing.space_m])
            .align_y(Alignment::Center);

        let height = self.station.surface().top_bar_height;
        widget::container(row)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_y(height)
            .style(style::named(self.station.styles(), StyleName::TopBar))
            .into()
    }

    /// Whichever panel the registry marks visible
    fn build_visible_panel(&self) -> Element<'_, Message> {
        let registry = self.station.registry();
        let panels = &self.station.refs().panels;
        let height = self.station.surface().panel_height();

        let panel = ScreenId::ALL
            .into_iter()
            .find(|screen| registry.is_visible(panels.panel(*screen)))
            .map(|screen| match screen {
                ScreenId::Scan => self.build_scan_panel(),
                ScreenId::Fields => self.build_fields_panel(),
                ScreenId::Settings => self.build_settings_panel(),
            })
            .unwrap_or_else(|| widget::Space::new(Length::Fill, Length::Fill).into());

        let spacing = cosmic::theme::spacing();
        widget::container(panel)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .padding(spacing.space_s)
            .into()
    }

    fn build_scan_panel(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let controls = widget::column()
            .push(self.build_control_card())
            .push(self.build_results_card())
            .spacing(spacing.space_s)
            .width(Length::Fixed(crate::constants::layout::CONTROL_COLUMN_WIDTH));

        widget::row()
            .push(self.build_camera_preview())
            .push(controls)
            .spacing(spacing.space_s)
            .align_y(Alignment::Start)
            .into()
    }

    fn build_toasts(&self) -> Option<Element<'_, Message>> {
        let toasts = self.station.toasts();
        if toasts.is_empty() {
            return None;
        }

        let now = Instant::now();
        let spacing = cosmic::theme::spacing();
        let column = toasts
            .visible()
            .iter()
            .fold(widget::column().spacing(spacing.space_xxs), |column, toast| {
                let alpha = crate::station::toast::ToastQueue::opacity(toast, now);
                column.push(
                    widget::container(widget::text(toast.message.as_str()).size(16))
                        .padding([spacing.space_xs, spacing.space_m])
                        .style(move |_theme| widget::container::Style {
                            background: Some(cosmic::iced::Background::Color(
                                cosmic::iced::Color {
                                    a: 0.85 * alpha,
                                    ..style::color(palette::TOP_BAR)
                                },
                            )),
                            text_color: Some(cosmic::iced::Color {
                                a: alpha,
                                ..cosmic::iced::Color::WHITE
                            }),
                            border: cosmic::iced::Border {
                                radius: 8.0.into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }),
                )
            });

        let bottom_offset = self.station.surface().nav_bar_height + f32::from(spacing.space_m);
        Some(
            widget::container(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .padding(cosmic::iced::Padding {
                    bottom: bottom_offset,
                    ..cosmic::iced::Padding::ZERO
                })
                .into(),
        )
    }
}
