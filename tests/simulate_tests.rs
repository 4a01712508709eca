// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for scripted simulation

use scan_station::cli::{run_script, run_steps, parse_script};
use scan_station::station::{ScanState, ScreenId};
use scan_station::{AppError, Config, ScriptError};

#[test]
fn test_scan_script() {
    let config = Config::default();
    let snapshot = run_script("camera-on, capture, wait:1500", &config).unwrap();

    assert_eq!(snapshot.state, ScanState::OcrDone);
    assert_eq!(snapshot.result.sex, "MALE");
    assert!(snapshot.controls.retake_enabled);
}

#[test]
fn test_wait_too_short_keeps_ocr_running() {
    let config = Config::default();
    let snapshot = run_script("camera-on,capture,wait:1000", &config).unwrap();

    assert_eq!(snapshot.state, ScanState::OcrRunning);
    assert!(snapshot.pending_ocr.is_some());
}

#[test]
fn test_custom_ocr_delay() {
    let config = Config {
        ocr_delay_ms: 200,
        ..Config::default()
    };
    let snapshot = run_script("camera-on,capture,wait:200", &config).unwrap();
    assert_eq!(snapshot.state, ScanState::OcrDone);
}

#[test]
fn test_form_script() {
    let script = "nav:fields
        field:last_name=Garcia
        field:first_name=Luis
        field:philhealth_no=11-222333444-5
        field:birthdate=1979-11-02
        submit";

    let steps = parse_script(script).unwrap();
    let snapshot = run_steps(&steps, &Config::default());

    assert_eq!(snapshot.screen, ScreenId::Fields);
    assert_eq!(snapshot.state, ScanState::Idle);
    assert_eq!(snapshot.form.last_name, "Garcia");
    assert_eq!(snapshot.toasts.len(), 1);
}

#[test]
fn test_toast_gone_after_wait() {
    let config = Config::default();
    let snapshot = run_script("restart,wait:2000", &config).unwrap();
    assert!(snapshot.toasts.is_empty());
}

#[test]
fn test_snapshot_serializes() {
    let config = Config::default();
    let snapshot = run_script("net:offline,clock:08:30,brightness:55", &config).unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["state"], "idle");
    assert_eq!(json["chips"]["network"]["text"], "NET: OFFLINE");
    assert_eq!(json["clock"], "08:30");
    assert_eq!(json["brightness"], 55);
}

#[test]
fn test_bad_script_reports_step() {
    let config = Config::default();
    match run_script("camera-on,jump", &config) {
        Err(AppError::Script(ScriptError::UnknownStep(step))) => assert_eq!(step, "jump"),
        other => panic!("unexpected result: {:?}", other.map(|s| s.state)),
    }
}
