// SPDX-License-Identifier: GPL-3.0-only

//! Scripted simulation of the station
//!
//! A script is a comma or newline separated list of steps:
//!
//! - `camera-on`, `camera-off`, `capture`, `retake`, `clear`
//! - `wait:<ms>` advances virtual time and fires due timers
//! - `nav:<scan|fields|settings>`
//! - `net:<lan|offline>`
//! - `clock:<text>`
//! - `field:<name>=<value>`, `submit`
//! - `brightness:<0-100>`, `restart`
//!
//! Time never passes unless a `wait` step says so, which keeps runs
//! reproducible.

use crate::config::Config;
use crate::errors::{AppResult, ScriptError};
use crate::station::{
    FormField, HeadlessDriver, ScanEvent, ScreenId, Station, StationEvent, StationSnapshot,
};
use std::time::{Duration, Instant};
use tracing::debug;

/// One parsed script step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Forward an event to the station
    Event(StationEvent),
    /// Let virtual time pass
    Wait(Duration),
}

/// Parse a single step
pub fn parse_step(step: &str) -> Result<Step, ScriptError> {
    let (name, argument) = match step.split_once(':') {
        Some((name, argument)) => (name.trim(), Some(argument.trim())),
        None => (step.trim(), None),
    };

    let invalid = |argument: &str| ScriptError::InvalidArgument {
        step: name.to_string(),
        argument: argument.to_string(),
    };
    let scan = |event| Ok(Step::Event(StationEvent::Scan(event)));

    match (name, argument) {
        ("camera-on", None) => scan(ScanEvent::CameraToggleOn),
        ("camera-off", None) => scan(ScanEvent::CameraToggleOff),
        ("capture", None) => scan(ScanEvent::CaptureRequested),
        ("retake", None) => scan(ScanEvent::RetakeRequested),
        ("clear", None) => scan(ScanEvent::ClearRequested),
        ("submit", None) => Ok(Step::Event(StationEvent::SubmitForm)),
        ("restart", None) => Ok(Step::Event(StationEvent::RestartRequested)),
        ("wait", Some(ms)) => ms
            .parse::<u64>()
            .map(|ms| Step::Wait(Duration::from_millis(ms)))
            .map_err(|_| invalid(ms)),
        ("nav", Some(target)) => ScreenId::from_name(target)
            .map(|screen| Step::Event(StationEvent::Navigate(screen)))
            .ok_or_else(|| invalid(target)),
        ("net", Some(link)) => match link.to_ascii_lowercase().as_str() {
            "lan" | "on" | "up" => Ok(Step::Event(StationEvent::NetworkStatus(true))),
            "offline" | "off" | "down" => Ok(Step::Event(StationEvent::NetworkStatus(false))),
            _ => Err(invalid(link)),
        },
        ("clock", Some(text)) => Ok(Step::Event(StationEvent::Clock(text.to_string()))),
        ("brightness", Some(value)) => value
            .parse::<u8>()
            .ok()
            .filter(|v| *v <= 100)
            .map(|v| Step::Event(StationEvent::BrightnessChanged(v)))
            .ok_or_else(|| invalid(value)),
        ("field", Some(assignment)) => {
            let (field, value) = assignment
                .split_once('=')
                .ok_or_else(|| invalid(assignment))?;
            let field = FormField::from_name(field.trim()).ok_or_else(|| invalid(assignment))?;
            Ok(Step::Event(StationEvent::FieldEdited(
                field,
                value.trim().to_string(),
            )))
        }
        (
            "camera-on" | "camera-off" | "capture" | "retake" | "clear" | "submit" | "restart",
            Some(argument),
        ) => Err(invalid(argument)),
        ("wait" | "nav" | "net" | "clock" | "brightness" | "field", None) => Err(invalid("")),
        _ => Err(ScriptError::UnknownStep(name.to_string())),
    }
}

/// Parse a whole script, skipping blank steps
pub fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .split([',', '\n'])
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(parse_step)
        .collect()
}

/// Run `steps` against a fresh station and return the final snapshot
pub fn run_steps(steps: &[Step], config: &Config) -> StationSnapshot {
    let station = Station::with_settings(config.layout.surface(), config.station_settings());
    let mut driver = HeadlessDriver::new(station);
    let mut now = Instant::now();

    for step in steps {
        match step {
            Step::Event(event) => {
                debug!(?event, "Script event");
                driver.dispatch(event.clone(), now);
            }
            Step::Wait(duration) => {
                now += *duration;
                let fired = driver.advance(now);
                debug!(ms = duration.as_millis() as u64, fired, "Script wait");
            }
        }
    }

    driver.station().snapshot(now)
}

/// Parse and run a script
pub fn run_script(script: &str, config: &Config) -> AppResult<StationSnapshot> {
    let steps = parse_script(script)?;
    Ok(run_steps(&steps, config))
}

/// Run a script and print the final snapshot as JSON
pub fn simulate(script: &str, ocr_delay_ms: Option<u64>, pretty: bool) -> AppResult<()> {
    let mut config = Config::default();
    if let Some(ms) = ocr_delay_ms {
        config.ocr_delay_ms = ms;
    }

    let snapshot = run_script(script, &config)?;
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_parse_simple_steps() {
        assert_eq!(
            parse_step("capture"),
            Ok(Step::Event(StationEvent::Scan(ScanEvent::CaptureRequested)))
        );
        assert_eq!(
            parse_step("wait:1500"),
            Ok(Step::Wait(Duration::from_millis(1500)))
        );
        assert_eq!(
            parse_step("nav:settings"),
            Ok(Step::Event(StationEvent::Navigate(ScreenId::Settings)))
        );
        assert_eq!(
            parse_step("net:offline"),
            Ok(Step::Event(StationEvent::NetworkStatus(false)))
        );
    }

    #[test]
    fn test_parse_field_assignment() {
        assert_eq!(
            parse_step("field:first_name=Juan Carlos"),
            Ok(Step::Event(StationEvent::FieldEdited(
                FormField::FirstName,
                "Juan Carlos".to_string()
            )))
        );
        assert!(matches!(
            parse_step("field:first_name"),
            Err(ScriptError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_step("field:nickname=JC"),
            Err(ScriptError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_step("dance"),
            Err(ScriptError::UnknownStep("dance".to_string()))
        );
        assert!(matches!(
            parse_step("wait:soon"),
            Err(ScriptError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_step("wait"),
            Err(ScriptError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_step("capture:now"),
            Err(ScriptError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_step("brightness:120"),
            Err(ScriptError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_simulate_reports_script_errors() {
        assert!(matches!(
            simulate("camera-on,jump", None, false),
            Err(AppError::Script(ScriptError::UnknownStep(step))) if step == "jump"
        ));
    }

    #[test]
    fn test_parse_script_skips_blanks() {
        let steps = parse_script("camera-on, capture,\n\nwait:10,").unwrap();
        assert_eq!(steps.len(), 3);
    }
}
