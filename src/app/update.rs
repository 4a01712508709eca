// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The `update()` function only routes; the work happens in the `handlers`
//! submodules:
//!
//! - `handlers::scan`: station events, OCR timer and toast sweeps
//! - `handlers::system`: config, theme, clock and connectivity

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== Station =====
            Message::Station(event) => self.handle_station_event(event),
            Message::OcrTimerElapsed(ticket) => self.handle_ocr_timer_elapsed(ticket),

            // ===== Status bar =====
            Message::ClockTick(time) => self.handle_clock_tick(time),
            Message::NetworkProbed(is_lan) => self.handle_network_probed(is_lan),

            // ===== System =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::Noop => Task::none(),
        }
    }
}
