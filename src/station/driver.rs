// SPDX-License-Identifier: GPL-3.0-only

//! Headless event driver
//!
//! Runs a [`Station`] without an async runtime. Timer effects become
//! deadlines in a queue; [`HeadlessDriver::advance`] fires the ones that are
//! due, in deadline order, at their own deadline instant. Used by the
//! terminal host, the simulator and the tests.

use super::{Effect, OcrTicket, ScanEvent, Station, StationEvent, TimerEffect};
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    OcrCompleted(OcrTicket),
    ExpireToasts,
}

impl Pending {
    fn event(self) -> StationEvent {
        match self {
            Pending::OcrCompleted(ticket) => StationEvent::Scan(ScanEvent::OcrCompleted(ticket)),
            Pending::ExpireToasts => StationEvent::ExpireToasts,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    seq: u64,
    pending: Pending,
}

/// Station plus a deadline queue
#[derive(Debug, Clone)]
pub struct HeadlessDriver {
    station: Station,
    deadlines: Vec<Deadline>,
    next_seq: u64,
}

impl HeadlessDriver {
    pub fn new(station: Station) -> Self {
        Self {
            station,
            deadlines: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    /// Apply `event` at `now` and queue whatever timers it asks for
    pub fn dispatch(&mut self, event: StationEvent, now: Instant) {
        let effects = self.station.dispatch(event, now);
        self.apply_effects(effects, now);
    }

    /// Fire every deadline due at or before `now`; returns how many fired
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;

        while let Some(index) = self.next_due(now) {
            let deadline = self.deadlines.swap_remove(index);
            trace!(pending = ?deadline.pending, "Deadline reached");
            let effects = self.station.dispatch(deadline.pending.event(), deadline.at);
            self.apply_effects(effects, deadline.at);
            fired += 1;
        }

        fired
    }

    /// Earliest queued deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|d| d.at).min()
    }

    pub fn pending_count(&self) -> usize {
        self.deadlines.len()
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.deadlines
            .iter()
            .enumerate()
            .filter(|(_, d)| d.at <= now)
            .min_by_key(|(_, d)| (d.at, d.seq))
            .map(|(index, _)| index)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::Timer(TimerEffect::ScheduleOcr { ticket, delay }) => {
                    self.push(now + delay, Pending::OcrCompleted(ticket));
                }
                Effect::Timer(TimerEffect::CancelOcr { ticket }) => {
                    let cancelled = Pending::OcrCompleted(ticket);
                    self.deadlines.retain(|d| d.pending != cancelled);
                    debug!(ticket = ticket.id(), "OCR completion cancelled");
                }
                Effect::ExpireToastsAfter(delay) => {
                    self.push(now + delay, Pending::ExpireToasts);
                }
            }
        }
    }

    fn push(&mut self, at: Instant, pending: Pending) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.deadlines.push(Deadline { at, seq, pending });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::{ScanState, Surface};
    use std::time::Duration;

    #[test]
    fn test_ocr_fires_after_delay() {
        let start = Instant::now();
        let mut driver = HeadlessDriver::new(Station::initialize(Surface::default()));
        driver.dispatch(StationEvent::Scan(ScanEvent::CameraToggleOn), start);
        driver.dispatch(StationEvent::Scan(ScanEvent::CaptureRequested), start);

        assert_eq!(driver.next_deadline(), Some(start + Duration::from_millis(1500)));
        assert_eq!(driver.advance(start + Duration::from_millis(1499)), 0);
        assert_eq!(driver.station().state(), ScanState::OcrRunning);

        assert_eq!(driver.advance(start + Duration::from_millis(1500)), 1);
        assert_eq!(driver.station().state(), ScanState::OcrDone);
    }

    #[test]
    fn test_cancel_removes_deadline() {
        let start = Instant::now();
        let mut driver = HeadlessDriver::new(Station::initialize(Surface::default()));
        driver.dispatch(StationEvent::Scan(ScanEvent::CameraToggleOn), start);
        driver.dispatch(StationEvent::Scan(ScanEvent::CaptureRequested), start);
        driver.dispatch(StationEvent::Scan(ScanEvent::ClearRequested), start);

        assert_eq!(driver.pending_count(), 0);
        driver.advance(start + Duration::from_secs(5));
        assert_eq!(driver.station().state(), ScanState::Idle);
    }
}
