// SPDX-License-Identifier: GPL-3.0-only

//! Conversion of station styles into iced container styles

use crate::station::styles::{Rgb, Style, StyleName, StyleRegistry, Tone};
use cosmic::iced::{Background, Border, Color, Shadow, Vector};
use cosmic::widget;

pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Container style for a registered style
pub fn container(style: &Style) -> widget::container::Style {
    widget::container::Style {
        background: style.background.map(|c| Background::Color(color(c))),
        text_color: style.text_color.map(color),
        border: Border {
            color: style.border_color.map(color).unwrap_or(Color::TRANSPARENT),
            width: style.border_width,
            radius: style.radius.into(),
        },
        shadow: style
            .shadow
            .map(|s| Shadow {
                color: Color {
                    a: s.opacity,
                    ..color(s.color)
                },
                offset: Vector::new(0.0, 2.0),
                blur_radius: s.blur,
            })
            .unwrap_or_default(),
        ..Default::default()
    }
}

/// Closure suitable for `container(..).style(..)`
pub fn named(
    styles: &StyleRegistry,
    name: StyleName,
) -> impl Fn(&cosmic::Theme) -> widget::container::Style + 'static {
    let style = container(styles.get(name));
    move |_theme| style.clone()
}

/// Chip container tinted with `tone`
pub fn chip(
    styles: &StyleRegistry,
    tone: Tone,
) -> impl Fn(&cosmic::Theme) -> widget::container::Style + 'static {
    let mut style = container(styles.get(StyleName::Chip));
    style.background = Some(Background::Color(color(tone.color())));
    move |_theme| style.clone()
}

/// Flat solid block
pub fn solid(rgb: Rgb) -> impl Fn(&cosmic::Theme) -> widget::container::Style + 'static {
    move |_theme| widget::container::Style {
        background: Some(Background::Color(color(rgb))),
        ..Default::default()
    }
}
