// SPDX-License-Identifier: GPL-3.0-only

//! Manual entry panel

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::layout;
use crate::station::styles::{StyleName, palette};
use crate::station::{FormField, StationEvent};
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Form card plus the card-image preview
    pub fn build_fields_panel(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let registry = self.station.registry();
        let form = &self.station.refs().form;

        let entries = FormField::ALL.into_iter().fold(
            widget::column().spacing(spacing.space_xxs),
            |column, field| {
                let input = widget::text_input(field.placeholder(), registry.text(form.entry(field)))
                    .on_input(move |value| Message::field_edited(field, value))
                    .width(Length::Fill);
                column.push(Self::caption(field.label())).push(input)
            },
        );

        let mut form_column = widget::column()
            .push(entries)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::button::suggested(registry.text(form.submit))
                    .on_press(Message::Station(StationEvent::SubmitForm)),
            );

        if registry.is_visible(form.error) {
            form_column = form_column.push(
                widget::text(registry.text(form.error))
                    .size(14)
                    .class(cosmic::theme::Text::Color(style::color(
                        registry.tone(form.error).color(),
                    ))),
            );
        }

        let form_card = widget::container(form_column.spacing(spacing.space_xs))
            .width(Length::Fixed(layout::FORM_CARD_WIDTH))
            .height(Length::Fixed(layout::PANEL_CARD_HEIGHT))
            .padding(spacing.space_m)
            .style(style::named(self.station.styles(), StyleName::Card));

        let image = widget::container(widget::text(crate::constants::text::TAP_TO_ZOOM).size(14))
            .width(Length::Fixed(layout::FIELD_IMAGE_WIDTH))
            .height(Length::Fixed(layout::FIELD_IMAGE_HEIGHT))
            .center_x(Length::Fixed(layout::FIELD_IMAGE_WIDTH))
            .center_y(Length::Fixed(layout::FIELD_IMAGE_HEIGHT))
            .style(style::solid(palette::GREY));

        let preview_card = widget::container(image)
            .width(Length::Fixed(layout::FIELD_PREVIEW_WIDTH))
            .height(Length::Fixed(layout::PANEL_CARD_HEIGHT))
            .center_x(Length::Fixed(layout::FIELD_PREVIEW_WIDTH))
            .style(style::named(self.station.styles(), StyleName::Card));

        widget::row()
            .push(form_card)
            .push(preview_card)
            .spacing(spacing.space_s)
            .into()
    }
}
