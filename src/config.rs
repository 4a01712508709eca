// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{DEFAULT_BRIGHTNESS, layout, text, timing};
use crate::station::{Branding, StationSettings, Surface};
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::System => "Match desktop",
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Kiosk surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub top_bar_height: f32,
    pub nav_bar_height: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            screen_width: layout::SCREEN_WIDTH,
            screen_height: layout::SCREEN_HEIGHT,
            top_bar_height: layout::TOP_BAR_HEIGHT,
            nav_bar_height: layout::NAV_BAR_HEIGHT,
        }
    }
}

impl LayoutSettings {
    pub fn surface(&self) -> Surface {
        Surface {
            width: self.screen_width,
            height: self.screen_height,
            top_bar_height: self.top_bar_height,
            nav_bar_height: self.nav_bar_height,
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Simulated OCR duration in milliseconds
    pub ocr_delay_ms: u64,
    /// How long a toast stays on screen in milliseconds
    pub toast_lifetime_ms: u64,
    /// Display brightness percentage (0-100)
    pub display_brightness: u8,
    /// chrono format string for the top bar clock
    pub clock_format: String,
    pub mission_title: String,
    pub station_title: String,
    pub layout: LayoutSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            ocr_delay_ms: timing::OCR_DELAY.as_millis() as u64,
            toast_lifetime_ms: timing::TOAST_LIFETIME.as_millis() as u64,
            display_brightness: DEFAULT_BRIGHTNESS,
            clock_format: "%H:%M".to_string(),
            mission_title: text::MISSION_TITLE.to_string(),
            station_title: text::STATION_TITLE.to_string(),
            layout: LayoutSettings::default(),
        }
    }
}

impl Config {
    /// Open the config store for `app_id` and read the current entry
    ///
    /// Falls back to defaults when the store cannot be opened; partial
    /// read errors are logged and the readable fields kept.
    pub fn load(app_id: &str) -> (Option<cosmic_config::Config>, Self) {
        match cosmic_config::Config::new(app_id, Self::VERSION) {
            Ok(handler) => {
                let config = match Self::get_entry(&handler) {
                    Ok(config) => config,
                    Err((errors, config)) => {
                        tracing::error!(?errors, "Errors loading config");
                        config
                    }
                };
                (Some(handler), config)
            }
            Err(err) => {
                tracing::error!(%err, "Failed to create config handler");
                (None, Self::default())
            }
        }
    }

    pub fn ocr_delay(&self) -> Duration {
        Duration::from_millis(self.ocr_delay_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }

    /// Station tunables derived from this config
    pub fn station_settings(&self) -> StationSettings {
        StationSettings {
            ocr_delay: self.ocr_delay(),
            toast_lifetime: self.toast_lifetime(),
            brightness: self.display_brightness.min(100),
            branding: Branding {
                mission_title: self.mission_title.clone(),
                station_title: self.station_title.clone(),
                ..Branding::default()
            },
        }
    }

    /// Format `now` for the clock label, falling back to `HH:MM`
    pub fn format_clock<Tz>(&self, now: &chrono::DateTime<Tz>) -> String
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        use std::fmt::Write;

        let mut out = String::new();
        if write!(out, "{}", now.format(&self.clock_format)).is_err() {
            tracing::warn!(format = %self.clock_format, "Invalid clock format, using default");
            out = now.format("%H:%M").to_string();
        }
        out
    }
}
