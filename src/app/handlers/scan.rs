// SPDX-License-Identifier: GPL-3.0-only

//! Station event handlers
//!
//! Feeds UI events into the station and turns the returned effects into
//! tasks: the cancellable OCR timer and delayed toast sweeps.

use crate::app::state::{AppModel, Message, PendingOcr};
use crate::station::{Effect, OcrTicket, ScanEvent, StationEvent, TimerEffect};
use cosmic::Task;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Wait `delay` unless `cancel` fires first
///
/// Returns `true` when the delay elapsed. A dropped sender counts as a
/// cancellation.
pub async fn ocr_timer(delay: Duration, cancel: tokio::sync::oneshot::Receiver<()>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(delay) => true,
        _ = cancel => false,
    }
}

impl AppModel {
    pub(crate) fn handle_station_event(
        &mut self,
        event: StationEvent,
    ) -> Task<cosmic::Action<Message>> {
        if let StationEvent::BrightnessChanged(value) = &event {
            self.save_brightness(*value);
        }
        let effects = self.station.dispatch(event, Instant::now());
        self.run_effects(effects)
    }

    pub(crate) fn handle_ocr_timer_elapsed(
        &mut self,
        ticket: OcrTicket,
    ) -> Task<cosmic::Action<Message>> {
        if self
            .pending_ocr
            .as_ref()
            .is_some_and(|pending| pending.ticket == ticket)
        {
            self.pending_ocr = None;
        }
        // The state machine drops completions for tickets it no longer awaits
        self.handle_station_event(StationEvent::Scan(ScanEvent::OcrCompleted(ticket)))
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<cosmic::Action<Message>> {
        let tasks: Vec<_> = effects
            .into_iter()
            .map(|effect| match effect {
                Effect::Timer(TimerEffect::ScheduleOcr { ticket, delay }) => {
                    self.schedule_ocr(ticket, delay)
                }
                Effect::Timer(TimerEffect::CancelOcr { ticket }) => {
                    self.cancel_ocr(ticket);
                    Task::none()
                }
                Effect::ExpireToastsAfter(delay) => Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                    },
                    |_| cosmic::Action::App(Message::Station(StationEvent::ExpireToasts)),
                ),
            })
            .collect();

        Task::batch(tasks)
    }

    fn schedule_ocr(&mut self, ticket: OcrTicket, delay: Duration) -> Task<cosmic::Action<Message>> {
        if let Some(mut previous) = self.pending_ocr.take() {
            previous.cancel();
        }

        let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel();
        self.pending_ocr = Some(PendingOcr::new(ticket, cancel_tx));
        info!(ticket = ticket.id(), delay_ms = delay.as_millis() as u64, "OCR started");

        Task::perform(ocr_timer(delay, cancel_rx), move |elapsed| {
            if elapsed {
                cosmic::Action::App(Message::OcrTimerElapsed(ticket))
            } else {
                cosmic::Action::App(Message::Noop)
            }
        })
    }

    fn cancel_ocr(&mut self, ticket: OcrTicket) {
        match self.pending_ocr.take() {
            Some(mut pending) if pending.ticket == ticket => {
                pending.cancel();
                debug!(ticket = ticket.id(), "OCR timer cancelled");
            }
            other => self.pending_ocr = other,
        }
    }
}
