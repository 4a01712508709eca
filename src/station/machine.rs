// SPDX-License-Identifier: GPL-3.0-only

//! Capture/OCR state machine
//!
//! Drives the scan panel: status chips, button enablement, spinner and
//! overlay visibility, and the result card. Transitions are total over
//! [`ScanEvent`]; every event ends with a call to [`render`], which derives
//! the whole scan UI from the current state alone.
//!
//! The simulated OCR step is a delayed [`ScanEvent::OcrCompleted`] carrying
//! an [`OcrTicket`]. Leaving `OcrRunning` for any reason cancels the ticket,
//! so a completion that arrives late is ignored.

use crate::constants::text;
use crate::constants::timing::OCR_DELAY;
use crate::station::builder::ScanRefs;
use crate::station::record::ExtractedRecord;
use crate::station::styles::Tone;
use crate::station::widgets::WidgetRegistry;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Capture flow states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    /// Camera switched off
    #[default]
    Idle,
    /// Camera on, capture allowed
    CameraReady,
    /// Frame grab in progress (transient)
    Capturing,
    /// Waiting for the simulated OCR result
    OcrRunning,
    /// Result card populated
    OcrDone,
    /// Manual entry rejected
    ValidationError,
}

impl ScanState {
    pub const ALL: [ScanState; 6] = [
        ScanState::Idle,
        ScanState::CameraReady,
        ScanState::Capturing,
        ScanState::OcrRunning,
        ScanState::OcrDone,
        ScanState::ValidationError,
    ];
}

/// Identifies one scheduled OCR completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OcrTicket(u64);

impl OcrTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Inputs to the capture state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// Camera-ready switch turned on
    CameraToggleOn,
    /// Camera-ready switch turned off
    CameraToggleOff,
    /// Capture button pressed
    CaptureRequested,
    /// Simulated OCR delay elapsed
    OcrCompleted(OcrTicket),
    /// Discard the result and capture again
    RetakeRequested,
    /// Reset everything to idle
    ClearRequested,
    /// Manual entry failed validation
    ValidationFailed,
    /// Manual entry passed validation
    ValidationPassed,
}

/// Timer work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// Deliver `OcrCompleted(ticket)` after `delay`
    ScheduleOcr { ticket: OcrTicket, delay: Duration },
    /// Drop the pending completion for `ticket`
    CancelOcr { ticket: OcrTicket },
}

/// Outcome of one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ScanState,
    pub to: ScanState,
    pub effect: Option<TimerEffect>,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Capture/OCR state machine
#[derive(Debug, Clone)]
pub struct CaptureMachine {
    state: ScanState,
    pending: Option<OcrTicket>,
    next_ticket: u64,
    ocr_delay: Duration,
}

impl Default for CaptureMachine {
    fn default() -> Self {
        Self::new(OCR_DELAY)
    }
}

impl CaptureMachine {
    pub fn new(ocr_delay: Duration) -> Self {
        Self {
            state: ScanState::Idle,
            pending: None,
            next_ticket: 0,
            ocr_delay,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Ticket of the completion currently awaited, if any
    pub fn pending(&self) -> Option<OcrTicket> {
        self.pending
    }

    pub fn set_ocr_delay(&mut self, delay: Duration) {
        self.ocr_delay = delay;
    }

    /// Apply `event` and report the transition
    pub fn handle(&mut self, event: ScanEvent) -> Transition {
        let from = self.state;

        let (to, mut effect) = match (event, from) {
            (ScanEvent::CameraToggleOn, _) => (ScanState::CameraReady, None),
            (ScanEvent::CameraToggleOff, _) => (ScanState::Idle, None),
            (ScanEvent::CaptureRequested, ScanState::CameraReady) => {
                self.state = ScanState::Capturing;
                debug!("Frame captured, starting OCR");

                let ticket = OcrTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending = Some(ticket);

                let effect = TimerEffect::ScheduleOcr {
                    ticket,
                    delay: self.ocr_delay,
                };
                (ScanState::OcrRunning, Some(effect))
            }
            (ScanEvent::OcrCompleted(ticket), ScanState::OcrRunning)
                if self.pending == Some(ticket) =>
            {
                self.pending = None;
                (ScanState::OcrDone, None)
            }
            (ScanEvent::OcrCompleted(ticket), _) => {
                debug!(ticket = ticket.id(), state = ?from, "Ignoring stale OCR completion");
                (from, None)
            }
            (ScanEvent::RetakeRequested, ScanState::OcrDone) => (ScanState::CameraReady, None),
            (ScanEvent::ClearRequested, _) => (ScanState::Idle, None),
            (ScanEvent::ValidationFailed, _) => (ScanState::ValidationError, None),
            (ScanEvent::ValidationPassed, ScanState::ValidationError) => (ScanState::Idle, None),
            (event, state) => {
                debug!(?event, ?state, "Event not accepted in current state");
                (state, None)
            }
        };

        if from == ScanState::OcrRunning
            && to != ScanState::OcrRunning
            && let Some(ticket) = self.pending.take()
        {
            effect = Some(TimerEffect::CancelOcr { ticket });
        }

        self.state = to;
        if from != to {
            info!(?event, ?from, ?to, "Scan state changed");
        }

        Transition { from, to, effect }
    }
}

/// Text and colour of a status chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub text: &'static str,
    pub tone: Tone,
}

impl ChipView {
    const fn new(text: &'static str, tone: Tone) -> Self {
        Self { text, tone }
    }
}

/// Everything the scan UI shows for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanView {
    pub capture_enabled: bool,
    pub retake_enabled: bool,
    pub camera_switch_on: bool,
    pub camera_chip: ChipView,
    pub ocr_chip: ChipView,
    pub spinner_visible: bool,
    pub overlay_visible: bool,
    pub record: ExtractedRecord,
    pub form_error_visible: bool,
}

impl ScanView {
    /// Render contract: one fixed view per state
    pub fn for_state(state: ScanState) -> Self {
        const CAM_IDLE: ChipView = ChipView::new(text::CAM_IDLE, Tone::Neutral);
        const CAM_READY: ChipView = ChipView::new(text::CAM_READY, Tone::Positive);
        const OCR_IDLE: ChipView = ChipView::new(text::OCR_IDLE, Tone::Neutral);

        let idle = Self {
            capture_enabled: false,
            retake_enabled: false,
            camera_switch_on: false,
            camera_chip: CAM_IDLE,
            ocr_chip: OCR_IDLE,
            spinner_visible: false,
            overlay_visible: false,
            record: ExtractedRecord::placeholder(),
            form_error_visible: false,
        };

        match state {
            ScanState::Idle => idle,
            ScanState::CameraReady => Self {
                capture_enabled: true,
                camera_switch_on: true,
                camera_chip: CAM_READY,
                ..idle
            },
            ScanState::Capturing => Self {
                camera_switch_on: true,
                camera_chip: CAM_READY,
                ocr_chip: ChipView::new(text::OCR_CAPTURING, Tone::Warning),
                spinner_visible: true,
                ..idle
            },
            ScanState::OcrRunning => Self {
                camera_switch_on: true,
                camera_chip: CAM_READY,
                ocr_chip: ChipView::new(text::OCR_RUNNING, Tone::Warning),
                spinner_visible: true,
                ..idle
            },
            ScanState::OcrDone => Self {
                retake_enabled: true,
                camera_switch_on: true,
                camera_chip: CAM_READY,
                ocr_chip: ChipView::new(text::OCR_DONE, Tone::Positive),
                overlay_visible: true,
                record: ExtractedRecord::canned(),
                ..idle
            },
            ScanState::ValidationError => Self {
                ocr_chip: ChipView::new(text::OCR_CHECK_FIELDS, Tone::Alert),
                form_error_visible: true,
                ..idle
            },
        }
    }

    /// Write this view into the registry
    pub fn apply(&self, refs: &ScanRefs, registry: &mut WidgetRegistry) {
        registry.set_enabled(refs.capture_button, self.capture_enabled);
        registry.set_enabled(refs.retake_button, self.retake_enabled);
        registry.set_enabled(refs.clear_button, true);
        registry.set_checked(refs.camera_switch, self.camera_switch_on);

        registry.set_text(refs.chip_cam, self.camera_chip.text);
        registry.set_tone(refs.chip_cam, self.camera_chip.tone);
        registry.set_text(refs.chip_ocr, self.ocr_chip.text);
        registry.set_tone(refs.chip_ocr, self.ocr_chip.tone);

        registry.set_visible(refs.spinner, self.spinner_visible);
        registry.set_visible(refs.overlay, self.overlay_visible);

        registry.set_text(refs.result_name, self.record.name.as_str());
        registry.set_text(refs.result_id, self.record.id_number.as_str());
        registry.set_text(refs.result_dob, self.record.date_of_birth.as_str());
        registry.set_text(refs.result_sex, self.record.sex.as_str());
        registry.set_value(refs.confidence_bar, self.record.confidence.percent() as i32);
        registry.set_text(refs.confidence_label, self.record.confidence.to_string());

        registry.set_visible(refs.form_error, self.form_error_visible);
    }
}

/// Re-render the scan UI for `state`
pub fn render(state: ScanState, refs: &ScanRefs, registry: &mut WidgetRegistry) {
    ScanView::for_state(state).apply(refs, registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> CaptureMachine {
        let mut machine = CaptureMachine::default();
        machine.handle(ScanEvent::CameraToggleOn);
        machine
    }

    #[test]
    fn test_capture_schedules_ocr() {
        let mut machine = ready();
        let transition = machine.handle(ScanEvent::CaptureRequested);

        assert_eq!(transition.from, ScanState::CameraReady);
        assert_eq!(transition.to, ScanState::OcrRunning);
        let Some(TimerEffect::ScheduleOcr { ticket, delay }) = transition.effect else {
            panic!("expected ScheduleOcr, got {:?}", transition.effect);
        };
        assert_eq!(delay, OCR_DELAY);
        assert_eq!(machine.pending(), Some(ticket));
    }

    #[test]
    fn test_capture_outside_ready_is_noop() {
        for event in [ScanEvent::CameraToggleOff, ScanEvent::ValidationFailed] {
            let mut machine = CaptureMachine::default();
            machine.handle(event);
            let before = machine.state();

            let transition = machine.handle(ScanEvent::CaptureRequested);
            assert!(!transition.changed());
            assert_eq!(transition.effect, None);
            assert_eq!(machine.state(), before);
        }
    }

    #[test]
    fn test_leaving_ocr_running_cancels_ticket() {
        let mut machine = ready();
        let Some(TimerEffect::ScheduleOcr { ticket, .. }) =
            machine.handle(ScanEvent::CaptureRequested).effect
        else {
            panic!("expected ScheduleOcr");
        };

        let transition = machine.handle(ScanEvent::ClearRequested);
        assert_eq!(transition.to, ScanState::Idle);
        assert_eq!(transition.effect, Some(TimerEffect::CancelOcr { ticket }));
        assert_eq!(machine.pending(), None);

        // The late completion no longer moves the machine
        let late = machine.handle(ScanEvent::OcrCompleted(ticket));
        assert_eq!(late.to, ScanState::Idle);
    }

    #[test]
    fn test_old_ticket_rejected_after_recapture() {
        let mut machine = ready();
        let first = machine.handle(ScanEvent::CaptureRequested).effect;
        machine.handle(ScanEvent::CameraToggleOn);
        let second = machine.handle(ScanEvent::CaptureRequested).effect;

        let (
            Some(TimerEffect::ScheduleOcr { ticket: old, .. }),
            Some(TimerEffect::ScheduleOcr { ticket: new, .. }),
        ) = (first, second)
        else {
            panic!("expected two schedules");
        };
        assert_ne!(old, new);

        machine.handle(ScanEvent::OcrCompleted(old));
        assert_eq!(machine.state(), ScanState::OcrRunning);
        machine.handle(ScanEvent::OcrCompleted(new));
        assert_eq!(machine.state(), ScanState::OcrDone);
    }

    #[test]
    fn test_retake_only_from_done() {
        let mut machine = ready();
        machine.handle(ScanEvent::RetakeRequested);
        assert_eq!(machine.state(), ScanState::CameraReady);

        machine.handle(ScanEvent::CameraToggleOff);
        machine.handle(ScanEvent::RetakeRequested);
        assert_eq!(machine.state(), ScanState::Idle);
    }

    #[test]
    fn test_validation_passed_only_leaves_error_state() {
        let mut machine = ready();
        machine.handle(ScanEvent::ValidationPassed);
        assert_eq!(machine.state(), ScanState::CameraReady);

        machine.handle(ScanEvent::ValidationFailed);
        assert_eq!(machine.state(), ScanState::ValidationError);
        machine.handle(ScanEvent::ValidationPassed);
        assert_eq!(machine.state(), ScanState::Idle);
    }

    #[test]
    fn test_view_capture_enabled_only_when_ready() {
        for state in ScanState::ALL {
            assert_eq!(
                ScanView::for_state(state).capture_enabled,
                state == ScanState::CameraReady,
                "{:?}",
                state
            );
        }
    }
}
