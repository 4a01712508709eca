// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Kiosk layout defaults (pixels)
///
/// The station targets a 1024×600 touch panel. These values seed
/// [`crate::config::LayoutSettings`] and can be overridden there.
pub mod layout {
    /// Display width
    pub const SCREEN_WIDTH: f32 = 1024.0;

    /// Display height
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Height of the top status bar
    pub const TOP_BAR_HEIGHT: f32 = 64.0;

    /// Height of the bottom navigation bar
    pub const NAV_BAR_HEIGHT: f32 = 80.0;

    /// Navigation button size
    pub const NAV_BUTTON_WIDTH: f32 = 200.0;
    pub const NAV_BUTTON_HEIGHT: f32 = 60.0;

    /// Gap between navigation buttons
    pub const NAV_BUTTON_GAP: u16 = 40;

    /// Camera card on the scan panel
    pub const CAMERA_CARD_WIDTH: f32 = 580.0;
    pub const CAMERA_CARD_HEIGHT: f32 = 420.0;

    /// Black preview area inside the camera card
    pub const PREVIEW_WIDTH: f32 = 540.0;
    pub const PREVIEW_HEIGHT: f32 = 320.0;

    /// Right-hand control column on the scan panel
    pub const CONTROL_COLUMN_WIDTH: f32 = 380.0;
    pub const CONTROL_CARD_WIDTH: f32 = 360.0;
    pub const CONTROL_CARD_HEIGHT: f32 = 200.0;
    pub const RESULTS_CARD_HEIGHT: f32 = 180.0;

    /// Detection boxes drawn over the preview after OCR
    pub const DETECTION_BOX_COUNT: usize = 3;
    pub const DETECTION_BOX_WIDTH: f32 = 100.0;
    pub const DETECTION_BOX_HEIGHT: f32 = 30.0;
    pub const DETECTION_BOX_X: f32 = 50.0;
    pub const DETECTION_BOX_STRIDE: f32 = 120.0;
    pub const DETECTION_BOX_Y: f32 = 100.0;

    /// OCR spinner diameter
    pub const SPINNER_SIZE: f32 = 80.0;

    /// Confidence bar size
    pub const CONFIDENCE_BAR_WIDTH: f32 = 200.0;
    pub const CONFIDENCE_BAR_HEIGHT: f32 = 15.0;

    /// Fields panel
    pub const FORM_CARD_WIDTH: f32 = 600.0;
    pub const FIELD_PREVIEW_WIDTH: f32 = 360.0;
    pub const FIELD_IMAGE_WIDTH: f32 = 320.0;
    pub const FIELD_IMAGE_HEIGHT: f32 = 200.0;

    /// Settings panel
    pub const SETTINGS_CARD_WIDTH: f32 = 300.0;
    pub const SETTINGS_CARD_HEIGHT: f32 = 380.0;
    pub const BRIGHTNESS_SLIDER_WIDTH: f32 = 240.0;

    /// Shared card size on the panels (height of the card row)
    pub const PANEL_CARD_HEIGHT: f32 = 420.0;
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Simulated OCR processing time
    pub const OCR_DELAY: Duration = Duration::from_millis(1500);

    /// How long a toast stays on screen
    pub const TOAST_LIFETIME: Duration = Duration::from_millis(2000);

    /// Toast fade-in duration
    pub const TOAST_FADE_IN: Duration = Duration::from_millis(300);

    /// Clock refresh cadence
    pub const CLOCK_TICK: Duration = Duration::from_secs(1);

    /// NetworkManager polling interval
    pub const NETWORK_POLL_INTERVAL: Duration = Duration::from_secs(5);

    /// Terminal host input poll timeout (~60fps)
    pub const TERMINAL_POLL: Duration = Duration::from_millis(16);
}

/// Fixed strings shown by the station
pub mod text {
    pub const MISSION_TITLE: &str = "MEDICAL MISSION";
    pub const STATION_TITLE: &str = "ID SCAN STATION";

    pub const CAM_IDLE: &str = "CAM: IDLE";
    pub const CAM_READY: &str = "CAM: READY";

    pub const OCR_IDLE: &str = "OCR: IDLE";
    pub const OCR_CAPTURING: &str = "OCR: CAPTURING";
    pub const OCR_RUNNING: &str = "OCR: RUNNING";
    pub const OCR_DONE: &str = "OCR: DONE";
    pub const OCR_CHECK_FIELDS: &str = "OCR: CHECK FIELDS";

    pub const NET_LAN: &str = "NET: LAN";
    pub const NET_OFFLINE: &str = "NET: OFFLINE";

    pub const DEFAULT_CLOCK: &str = "12:00";

    pub const CAMERA_PREVIEW: &str = "CAMERA PREVIEW";
    pub const READY_CAMERA: &str = "Ready Camera";
    pub const CAPTURE: &str = "Capture & OCR";
    pub const RETAKE: &str = "Retake";
    pub const CLEAR: &str = "Clear";
    pub const TAP_TO_ZOOM: &str = "Tap to zoom";
    pub const SAVE_RECORD: &str = "Save";
    pub const DEVICE: &str = "DEVICE";
    pub const BRIGHTNESS: &str = "Brightness";
    pub const RESTART: &str = "RESTART";
    pub const STATION: &str = "STATION";

    pub const TOAST_RESTARTING: &str = "Restarting...";
    pub const TOAST_RECORD_SAVED: &str = "Record saved";

    /// Placeholder shown in an empty result field
    pub const PLACEHOLDER: &str = "-";
}

/// Default value for the brightness slider (percent)
pub const DEFAULT_BRIGHTNESS: u8 = 80;

/// Confidence reported by the simulated OCR
pub const CANNED_CONFIDENCE: u8 = 92;

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_height_fits_between_bars() {
        let panel = layout::SCREEN_HEIGHT - layout::TOP_BAR_HEIGHT - layout::NAV_BAR_HEIGHT;
        assert_eq!(panel, 456.0);
        assert!(layout::PANEL_CARD_HEIGHT <= panel);
    }

    #[test]
    fn test_toast_fades_in_before_expiring() {
        assert!(timing::TOAST_FADE_IN < timing::TOAST_LIFETIME);
    }
}
