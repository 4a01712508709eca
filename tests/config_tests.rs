// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use scan_station::Config;
use scan_station::config::{AppTheme, LayoutSettings};
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.ocr_delay(), Duration::from_millis(1500));
    assert_eq!(config.toast_lifetime(), Duration::from_secs(2));
    assert_eq!(config.display_brightness, 80);
    assert_eq!(config.app_theme, AppTheme::System);
}

#[test]
fn test_default_layout_is_kiosk_surface() {
    let surface = Config::default().layout.surface();

    assert_eq!(surface.width, 1024.0);
    assert_eq!(surface.height, 600.0);
    assert_eq!(surface.panel_height(), 456.0);
}

#[test]
fn test_layout_settings_serialize_as_plain_struct() {
    let layout: LayoutSettings = serde_json::from_str(
        r#"{"screen_width":800.0,"screen_height":480.0,"top_bar_height":56.0,"nav_bar_height":72.0}"#,
    )
    .unwrap();

    assert_eq!(layout.surface().width, 800.0);
    assert_eq!(layout.surface().panel_height(), 352.0);

    let config = Config {
        layout,
        ..Config::default()
    };
    assert_eq!(config.layout, layout);
}

#[test]
fn test_station_settings_carry_branding() {
    let config = Config {
        mission_title: "PROVINCIAL MISSION".to_string(),
        station_title: "DESK 2".to_string(),
        display_brightness: 250,
        ..Config::default()
    };

    let settings = config.station_settings();
    assert_eq!(settings.branding.mission_title, "PROVINCIAL MISSION");
    assert_eq!(settings.branding.station_title, "DESK 2");
    assert_eq!(settings.brightness, 100, "Brightness should be clamped");
}

#[test]
fn test_clock_format() {
    use chrono::TimeZone;

    let now = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();

    let config = Config::default();
    assert_eq!(config.format_clock(&now), "09:05");

    let config = Config {
        clock_format: "%I:%M %p".to_string(),
        ..Config::default()
    };
    assert_eq!(config.format_clock(&now), "09:05 AM");
}

#[test]
fn test_invalid_clock_format_falls_back() {
    use chrono::TimeZone;

    let now = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 17, 45, 0).unwrap();
    let config = Config {
        clock_format: "%Q".to_string(),
        ..Config::default()
    };
    assert_eq!(config.format_clock(&now), "17:45");
}

#[test]
fn test_theme_labels() {
    assert_eq!(AppTheme::ALL.len(), 3);
    for theme in AppTheme::ALL {
        assert!(!theme.label().is_empty());
    }
}
