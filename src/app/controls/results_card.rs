// SPDX-License-Identifier: GPL-3.0-only

//! Results card

use crate::app::state::{AppModel, Message};
use crate::app::style;
use crate::constants::layout;
use crate::station::WidgetId;
use crate::station::styles::StyleName;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

const CAPTION_WIDTH: f32 = 90.0;

impl AppModel {
    /// Extracted fields plus the confidence bar
    pub fn build_results_card(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let registry = self.station.registry();
        let scan = &self.station.refs().scan;

        let rows = [
            scan.result_name,
            scan.result_id,
            scan.result_dob,
            scan.result_sex,
        ]
        .into_iter()
        .fold(widget::column().spacing(spacing.space_xxs), |column, id| {
            column.push(self.build_result_row(id))
        });

        let confidence = widget::row()
            .push(
                cosmic::iced::widget::progress_bar(
                    0.0..=100.0,
                    registry.value(scan.confidence_bar) as f32,
                )
                .width(Length::Fixed(layout::CONFIDENCE_BAR_WIDTH))
                .height(Length::Fixed(layout::CONFIDENCE_BAR_HEIGHT)),
            )
            .push(widget::text(registry.text(scan.confidence_label)).size(14))
            .spacing(spacing.space_s)
            .align_y(Alignment::Center);

        widget::container(
            widget::column()
                .push(rows)
                .push(confidence)
                .spacing(spacing.space_s),
        )
        .width(Length::Fixed(layout::CONTROL_CARD_WIDTH))
        .height(Length::Fixed(layout::RESULTS_CARD_HEIGHT))
        .padding(spacing.space_s)
        .style(style::named(self.station.styles(), StyleName::Card))
        .into()
    }

    fn build_result_row(&self, id: WidgetId) -> Element<'_, Message> {
        let registry = self.station.registry();
        let caption = registry
            .get(id)
            .and_then(|w| w.name.as_deref())
            .unwrap_or_default();

        widget::row()
            .push(
                widget::text(caption)
                    .size(13)
                    .width(Length::Fixed(CAPTION_WIDTH)),
            )
            .push(widget::text(registry.text(id)).size(14).font(cosmic::font::bold()))
            .into()
    }
}
