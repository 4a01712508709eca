// SPDX-License-Identifier: GPL-3.0-only

//! Bottom bar module
//!
//! Navigation bar with one button per content panel.

pub mod panel_switcher;

use crate::app::state::{AppModel, Message};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the complete bottom bar widget
    ///
    /// The panel switcher is horizontally centered inside a bar of the
    /// configured height.
    pub fn build_bottom_bar(&self) -> Element<'_, Message> {
        let height = self.station.surface().nav_bar_height;

        let bottom_row = widget::row()
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_panel_switcher())
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .align_y(Alignment::Center);

        widget::container(bottom_row)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_y(height)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::WHITE)),
                ..Default::default()
            })
            .into()
    }
}
