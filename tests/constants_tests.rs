// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use scan_station::constants::{app_info, layout, text, timing};

#[test]
fn test_layout_fits_surface() {
    // Panel area sits between the top bar and the nav bar
    let panel = layout::SCREEN_HEIGHT - layout::TOP_BAR_HEIGHT - layout::NAV_BAR_HEIGHT;
    assert_eq!(panel, 456.0);
    assert!(layout::PANEL_CARD_HEIGHT <= panel);
    assert!(layout::CAMERA_CARD_HEIGHT <= panel);
}

#[test]
fn test_scan_columns_fit_width() {
    assert!(layout::CAMERA_CARD_WIDTH + layout::CONTROL_COLUMN_WIDTH <= layout::SCREEN_WIDTH);
    assert!(layout::FORM_CARD_WIDTH + layout::FIELD_PREVIEW_WIDTH <= layout::SCREEN_WIDTH);
}

#[test]
fn test_detection_boxes_fit_preview() {
    let last = layout::DETECTION_BOX_X
        + layout::DETECTION_BOX_STRIDE * (layout::DETECTION_BOX_COUNT as f32 - 1.0)
        + layout::DETECTION_BOX_WIDTH;
    assert!(last <= layout::PREVIEW_WIDTH);
}

#[test]
fn test_timing() {
    assert_eq!(timing::OCR_DELAY.as_millis(), 1500);
    assert_eq!(timing::TOAST_LIFETIME.as_millis(), 2000);
    assert!(timing::TOAST_FADE_IN < timing::TOAST_LIFETIME);
}

#[test]
fn test_chip_texts() {
    for chip in [text::CAM_IDLE, text::CAM_READY] {
        assert!(chip.starts_with("CAM: "));
    }
    for chip in [
        text::OCR_IDLE,
        text::OCR_CAPTURING,
        text::OCR_RUNNING,
        text::OCR_DONE,
        text::OCR_CHECK_FIELDS,
    ] {
        assert!(chip.starts_with("OCR: "));
    }
}

#[test]
fn test_version_is_set() {
    let version = app_info::version();
    assert!(!version.is_empty());
    assert!(!version.starts_with('v'), "tag prefix should be stripped: {}", version);
}
