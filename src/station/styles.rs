// SPDX-License-Identifier: GPL-3.0-only

//! Style registry
//!
//! A fixed set of named styles applied to widgets at construction time,
//! plus the semantic [`Tone`] palette used by status chips. Hosts translate
//! these toolkit-neutral values into their own colour types.

use serde::Serialize;

/// 8-bit sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_hex(0xFFFFFF);
    pub const BLACK: Rgb = Rgb::from_hex(0x000000);

    /// Build a colour from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Components as floats in `0.0..=1.0`
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Material palette "main" shades
pub mod palette {
    use super::Rgb;

    pub const GREY: Rgb = Rgb::from_hex(0x9E9E9E);
    pub const GREEN: Rgb = Rgb::from_hex(0x4CAF50);
    pub const LIGHT_GREEN: Rgb = Rgb::from_hex(0x8BC34A);
    pub const ORANGE: Rgb = Rgb::from_hex(0xFF9800);
    pub const RED: Rgb = Rgb::from_hex(0xF44336);
    pub const BLUE: Rgb = Rgb::from_hex(0x2196F3);

    /// Near-white application background
    pub const APP_BACKGROUND: Rgb = Rgb::from_hex(0xF4F7FA);

    /// Indigo top bar
    pub const TOP_BAR: Rgb = Rgb::from_hex(0x1A237E);
}

/// Semantic colour of a status chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Warning,
    Alert,
    Info,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Neutral,
        Tone::Positive,
        Tone::Warning,
        Tone::Alert,
        Tone::Info,
    ];

    /// Chip background for this tone
    pub fn color(self) -> Rgb {
        match self {
            Tone::Neutral => palette::GREY,
            Tone::Positive => palette::GREEN,
            Tone::Warning => palette::ORANGE,
            Tone::Alert => palette::RED,
            Tone::Info => palette::BLUE,
        }
    }
}

/// Drop shadow parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub blur: f32,
    pub color: Rgb,
    /// Opacity in `0.0..=1.0`
    pub opacity: f32,
}

/// Names of the registered styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleName {
    AppBackground,
    TopBar,
    Card,
    PrimaryButton,
    Chip,
    DetectionBox,
}

impl StyleName {
    pub const ALL: [StyleName; 6] = [
        StyleName::AppBackground,
        StyleName::TopBar,
        StyleName::Card,
        StyleName::PrimaryButton,
        StyleName::Chip,
        StyleName::DetectionBox,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// A visual style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub background: Option<Rgb>,
    pub text_color: Option<Rgb>,
    pub border_color: Option<Rgb>,
    pub border_width: f32,
    pub radius: f32,
    /// `[vertical, horizontal]`
    pub padding: [u16; 2],
    pub shadow: Option<Shadow>,
    pub height: Option<f32>,
    pub text_size: Option<u16>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: None,
            text_color: None,
            border_color: None,
            border_width: 0.0,
            radius: 0.0,
            padding: [0, 0],
            shadow: None,
            height: None,
            text_size: None,
        }
    }
}

/// Fixed registry of named styles
///
/// Built once by [`StyleRegistry::standard`]; lookups are infallible because
/// every [`StyleName`] has an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRegistry {
    styles: [Style; 6],
}

impl StyleRegistry {
    /// The station's stock styles
    pub fn standard() -> Self {
        let styles = StyleName::ALL.map(|name| match name {
            StyleName::AppBackground => Style {
                background: Some(palette::APP_BACKGROUND),
                ..Default::default()
            },
            StyleName::TopBar => Style {
                background: Some(palette::TOP_BAR),
                text_color: Some(Rgb::WHITE),
                ..Default::default()
            },
            StyleName::Card => Style {
                background: Some(Rgb::WHITE),
                radius: 12.0,
                padding: [16, 16],
                shadow: Some(Shadow {
                    blur: 20.0,
                    color: palette::GREY,
                    opacity: 40.0 / 255.0,
                }),
                ..Default::default()
            },
            StyleName::PrimaryButton => Style {
                background: Some(palette::BLUE),
                text_color: Some(Rgb::WHITE),
                radius: 8.0,
                height: Some(72.0),
                text_size: Some(18),
                ..Default::default()
            },
            StyleName::Chip => Style {
                background: Some(Tone::Neutral.color()),
                text_color: Some(Rgb::WHITE),
                radius: 20.0,
                padding: [4, 12],
                ..Default::default()
            },
            StyleName::DetectionBox => Style {
                border_color: Some(palette::LIGHT_GREEN),
                border_width: 2.0,
                ..Default::default()
            },
        });

        Self { styles }
    }

    pub fn get(&self, name: StyleName) -> &Style {
        &self.styles[name.index()]
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Rgb::from_hex(0x1A237E),
            Rgb {
                r: 0x1A,
                g: 0x23,
                b: 0x7E
            }
        );
    }

    #[test]
    fn test_every_style_registered() {
        let registry = StyleRegistry::standard();
        assert_eq!(
            registry.get(StyleName::AppBackground).background,
            Some(palette::APP_BACKGROUND)
        );
        assert_eq!(registry.get(StyleName::Card).radius, 12.0);
        assert_eq!(registry.get(StyleName::PrimaryButton).height, Some(72.0));
        assert_eq!(registry.get(StyleName::Chip).padding, [4, 12]);
        assert_eq!(registry.get(StyleName::DetectionBox).border_width, 2.0);
    }

    #[test]
    fn test_tones_are_distinct() {
        for (i, a) in Tone::ALL.iter().enumerate() {
            for b in &Tone::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a colour", a, b);
            }
        }
    }
}
