// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the station model driven through the headless driver

use scan_station::station::styles::Tone;
use scan_station::station::{
    FormField, HeadlessDriver, ScanEvent, ScanState, ScreenId, Station, StationEvent, Surface,
};
use std::time::{Duration, Instant};

fn driver() -> HeadlessDriver {
    HeadlessDriver::new(Station::initialize(Surface::default()))
}

fn scan(driver: &mut HeadlessDriver, event: ScanEvent, now: Instant) {
    driver.dispatch(StationEvent::Scan(event), now);
}

#[test]
fn test_full_capture_sequence() {
    let mut driver = driver();
    let t0 = Instant::now();

    scan(&mut driver, ScanEvent::CameraToggleOn, t0);
    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::CameraReady);
    assert_eq!(snapshot.chips.camera.text, "CAM: READY");
    assert!(snapshot.controls.capture_enabled);

    scan(&mut driver, ScanEvent::CaptureRequested, t0);
    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::OcrRunning);
    assert_eq!(snapshot.chips.ocr.text, "OCR: RUNNING");
    assert_eq!(snapshot.chips.ocr.tone, Tone::Warning);
    assert!(snapshot.controls.spinner_visible);
    assert!(!snapshot.controls.capture_enabled);

    // Not yet due
    assert_eq!(driver.advance(t0 + Duration::from_millis(1499)), 0);
    assert_eq!(driver.station().state(), ScanState::OcrRunning);

    assert_eq!(driver.advance(t0 + Duration::from_millis(1500)), 1);
    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::OcrDone);
    assert_eq!(snapshot.chips.ocr.text, "OCR: DONE");
    assert!(!snapshot.controls.spinner_visible);
    assert!(snapshot.controls.overlay_visible);
    assert!(snapshot.controls.retake_enabled);
    assert_eq!(snapshot.result.name, "DELA CRUZ, JUAN P.");
    assert_eq!(snapshot.result.id_number, "12-345678901-2");
    assert_eq!(snapshot.result.confidence, 92);
    assert_eq!(snapshot.result.confidence_label, "92%");
    assert_eq!(snapshot.pending_ocr, None);
}

#[test]
fn test_retake_returns_to_ready_and_clears_result() {
    let mut driver = driver();
    let t0 = Instant::now();

    scan(&mut driver, ScanEvent::CameraToggleOn, t0);
    scan(&mut driver, ScanEvent::CaptureRequested, t0);
    driver.advance(t0 + Duration::from_secs(2));
    assert_eq!(driver.station().state(), ScanState::OcrDone);

    scan(&mut driver, ScanEvent::RetakeRequested, t0 + Duration::from_secs(2));
    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::CameraReady);
    assert_eq!(snapshot.result.name, "-");
    assert_eq!(snapshot.result.confidence, 0);
    assert!(!snapshot.controls.overlay_visible);
    assert!(snapshot.controls.capture_enabled);
    assert!(snapshot.controls.camera_switch);
}

#[test]
fn test_clear_turns_switch_off() {
    let mut driver = driver();
    let t0 = Instant::now();

    scan(&mut driver, ScanEvent::CameraToggleOn, t0);
    scan(&mut driver, ScanEvent::CaptureRequested, t0);
    driver.advance(t0 + Duration::from_secs(2));

    scan(&mut driver, ScanEvent::ClearRequested, t0 + Duration::from_secs(2));
    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::Idle);
    assert!(!snapshot.controls.camera_switch);
    assert_eq!(snapshot.chips.camera.text, "CAM: IDLE");
    assert_eq!(snapshot.chips.ocr.text, "OCR: IDLE");
    assert_eq!(snapshot.result.name, "-");
}

#[test]
fn test_clear_during_ocr_cancels_completion() {
    let mut driver = driver();
    let t0 = Instant::now();

    scan(&mut driver, ScanEvent::CameraToggleOn, t0);
    scan(&mut driver, ScanEvent::CaptureRequested, t0);
    assert_eq!(driver.pending_count(), 1);

    scan(&mut driver, ScanEvent::ClearRequested, t0 + Duration::from_millis(500));
    assert_eq!(driver.pending_count(), 0);

    assert_eq!(driver.advance(t0 + Duration::from_secs(5)), 0);
    assert_eq!(driver.station().state(), ScanState::Idle);
    assert_eq!(driver.station().snapshot(t0).result.name, "-");
}

#[test]
fn test_camera_off_during_ocr_cancels_completion() {
    let mut driver = driver();
    let t0 = Instant::now();

    scan(&mut driver, ScanEvent::CameraToggleOn, t0);
    scan(&mut driver, ScanEvent::CaptureRequested, t0);
    scan(&mut driver, ScanEvent::CameraToggleOff, t0 + Duration::from_millis(100));

    // Turning back on and capturing again only honours the new ticket
    scan(&mut driver, ScanEvent::CameraToggleOn, t0 + Duration::from_millis(200));
    scan(&mut driver, ScanEvent::CaptureRequested, t0 + Duration::from_millis(300));

    assert_eq!(driver.advance(t0 + Duration::from_millis(1500)), 0);
    assert_eq!(driver.station().state(), ScanState::OcrRunning);
    assert_eq!(driver.advance(t0 + Duration::from_millis(1800)), 1);
    assert_eq!(driver.station().state(), ScanState::OcrDone);
}

#[test]
fn test_stale_completion_is_ignored() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();

    station.dispatch(StationEvent::Scan(ScanEvent::CameraToggleOn), now);
    station.dispatch(StationEvent::Scan(ScanEvent::CaptureRequested), now);
    let Some(first) = station.pending_ocr() else {
        panic!("capture should schedule OCR");
    };

    station.dispatch(StationEvent::Scan(ScanEvent::ClearRequested), now);
    station.dispatch(StationEvent::Scan(ScanEvent::CameraToggleOn), now);
    station.dispatch(StationEvent::Scan(ScanEvent::OcrCompleted(first)), now);

    assert_eq!(station.state(), ScanState::CameraReady);
}

#[test]
fn test_capture_enabled_only_when_ready() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();
    let capture = station.refs().scan.capture_button;

    let events = [
        ScanEvent::CaptureRequested,
        ScanEvent::CameraToggleOn,
        ScanEvent::CaptureRequested,
        ScanEvent::RetakeRequested,
        ScanEvent::CameraToggleOff,
        ScanEvent::ValidationFailed,
        ScanEvent::CameraToggleOn,
        ScanEvent::ClearRequested,
    ];

    for event in events {
        station.dispatch(StationEvent::Scan(event), now);
        assert_eq!(
            station.registry().is_enabled(capture),
            station.state() == ScanState::CameraReady,
            "capture enabled mismatch after {:?}",
            event
        );
    }
}

#[test]
fn test_render_is_idempotent() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();
    station.dispatch(StationEvent::Scan(ScanEvent::CameraToggleOn), now);

    let before = station.snapshot(now);
    station.render();
    station.render();
    assert_eq!(station.snapshot(now), before);
}

/// Drive a fresh station into `target` and return it with the time reached
fn driver_in(target: ScanState, t0: Instant) -> (HeadlessDriver, Instant) {
    let mut driver = driver();
    let mut now = t0;

    match target {
        ScanState::Idle | ScanState::Capturing => {}
        ScanState::CameraReady => scan(&mut driver, ScanEvent::CameraToggleOn, now),
        ScanState::OcrRunning => {
            scan(&mut driver, ScanEvent::CameraToggleOn, now);
            scan(&mut driver, ScanEvent::CaptureRequested, now);
        }
        ScanState::OcrDone => {
            scan(&mut driver, ScanEvent::CameraToggleOn, now);
            scan(&mut driver, ScanEvent::CaptureRequested, now);
            now += Duration::from_millis(1500);
            driver.advance(now);
        }
        ScanState::ValidationError => driver.dispatch(StationEvent::SubmitForm, now),
    }

    (driver, now)
}

#[test]
fn test_every_reachable_state_renders_and_clears() {
    let reachable = [
        ScanState::Idle,
        ScanState::CameraReady,
        ScanState::OcrRunning,
        ScanState::OcrDone,
        ScanState::ValidationError,
    ];

    for target in reachable {
        let t0 = Instant::now();
        let (mut driver, now) = driver_in(target, t0);
        assert_eq!(driver.station().state(), target);

        // Rendering again changes nothing
        let before = driver.station().snapshot(now);
        let mut rerendered = driver.station().clone();
        rerendered.render();
        rerendered.render();
        assert_eq!(rerendered.snapshot(now), before, "render drift in {:?}", target);

        assert_eq!(
            before.controls.capture_enabled,
            target == ScanState::CameraReady,
            "capture enabled mismatch in {:?}",
            target
        );

        scan(&mut driver, ScanEvent::ClearRequested, now);
        let cleared = driver.station().snapshot(now);
        assert_eq!(cleared.state, ScanState::Idle, "clear from {:?}", target);
        assert!(!cleared.controls.camera_switch);
        assert!(cleared.controls.clear_enabled);
        assert_eq!(cleared.result.name, "-");
        assert_eq!(cleared.result.id_number, "-");
        assert_eq!(cleared.result.confidence, 0);
        assert_eq!(cleared.result.confidence_label, "0%");
        assert_eq!(cleared.pending_ocr, None);

        // A stale OCR deadline must not pull the station out of Idle
        driver.advance(now + Duration::from_secs(5));
        assert_eq!(driver.station().state(), ScanState::Idle);
    }
}

#[test]
fn test_navigation_shows_one_panel() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();

    for target in [ScreenId::Fields, ScreenId::Settings, ScreenId::Settings, ScreenId::Scan] {
        station.dispatch(StationEvent::Navigate(target), now);
        assert_eq!(station.screen(), target);

        let panels = station.refs().panels;
        for screen in ScreenId::ALL {
            let registry = station.registry();
            assert_eq!(registry.is_visible(panels.panel(screen)), screen == target);
            assert_eq!(registry.is_checked(panels.nav_button(screen)), screen == target);
        }
    }
}

#[test]
fn test_navigation_keeps_scan_state() {
    let mut driver = driver();
    let t0 = Instant::now();

    scan(&mut driver, ScanEvent::CameraToggleOn, t0);
    scan(&mut driver, ScanEvent::CaptureRequested, t0);
    driver.dispatch(StationEvent::Navigate(ScreenId::Settings), t0);

    driver.advance(t0 + Duration::from_millis(1500));
    driver.dispatch(StationEvent::Navigate(ScreenId::Scan), t0 + Duration::from_millis(1600));
    assert_eq!(driver.station().state(), ScanState::OcrDone);
}

#[test]
fn test_status_bar_updates() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();

    station.dispatch(StationEvent::NetworkStatus(false), now);
    station.dispatch(StationEvent::Clock("14:05".to_string()), now);
    let snapshot = station.snapshot(now);
    assert_eq!(snapshot.chips.network.text, "NET: OFFLINE");
    assert_eq!(snapshot.chips.network.tone, Tone::Alert);
    assert_eq!(snapshot.clock, "14:05");

    station.dispatch(StationEvent::NetworkStatus(true), now);
    assert_eq!(station.snapshot(now).chips.network.text, "NET: LAN");
}

#[test]
fn test_restart_toast_expires() {
    let mut driver = driver();
    let t0 = Instant::now();

    driver.dispatch(StationEvent::RestartRequested, t0);
    assert_eq!(driver.station().toasts().visible().len(), 1);
    assert_eq!(driver.station().toasts().visible()[0].message, "Restarting...");

    driver.advance(t0 + Duration::from_millis(1999));
    assert_eq!(driver.station().toasts().visible().len(), 1);

    driver.advance(t0 + Duration::from_secs(2));
    assert!(driver.station().toasts().is_empty());
}

#[test]
fn test_overlapping_toasts_expire_separately() {
    let mut driver = driver();
    let t0 = Instant::now();

    driver.dispatch(StationEvent::RestartRequested, t0);
    driver.dispatch(StationEvent::RestartRequested, t0 + Duration::from_secs(1));

    driver.advance(t0 + Duration::from_secs(2));
    assert_eq!(driver.station().toasts().visible().len(), 1);

    driver.advance(t0 + Duration::from_secs(3));
    assert!(driver.station().toasts().is_empty());
}

#[test]
fn test_manual_entry_validation() {
    let mut driver = driver();
    let t0 = Instant::now();

    driver.dispatch(StationEvent::Navigate(ScreenId::Fields), t0);
    driver.dispatch(
        StationEvent::FieldEdited(FormField::LastName, "Santos".to_string()),
        t0,
    );
    driver.dispatch(StationEvent::SubmitForm, t0);

    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::ValidationError);
    assert_eq!(snapshot.chips.ocr.text, "OCR: CHECK FIELDS");
    assert_eq!(snapshot.form_error.as_deref(), Some("FIRST NAME is required"));

    for (field, value) in [
        (FormField::FirstName, "Maria"),
        (FormField::PhilhealthNo, "01-234567890-1"),
        (FormField::Birthdate, "1990-02-28"),
    ] {
        driver.dispatch(StationEvent::FieldEdited(field, value.to_string()), t0);
    }
    driver.dispatch(StationEvent::SubmitForm, t0);

    let snapshot = driver.station().snapshot(t0);
    assert_eq!(snapshot.state, ScanState::Idle);
    assert_eq!(snapshot.form_error, None);
    assert_eq!(snapshot.form.first_name, "Maria");
    assert_eq!(snapshot.toasts.len(), 1);
    assert_eq!(snapshot.toasts[0].message, "Record saved");
}

#[test]
fn test_malformed_birthdate_rejected() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();

    for (field, value) in [
        (FormField::LastName, "Reyes"),
        (FormField::FirstName, "Ana"),
        (FormField::PhilhealthNo, "01-234567890-1"),
        (FormField::Birthdate, "1990-02-30"),
    ] {
        station.set_form_field(field, value);
    }

    let (result, _) = station.submit_form(now);
    assert!(result.is_err());
    assert_eq!(station.state(), ScanState::ValidationError);
}

#[test]
fn test_brightness_is_clamped() {
    let mut station = Station::initialize(Surface::default());
    let now = Instant::now();

    station.dispatch(StationEvent::BrightnessChanged(40), now);
    assert_eq!(station.brightness(), 40);
    station.dispatch(StationEvent::BrightnessChanged(200), now);
    assert_eq!(station.brightness(), 100);
}
