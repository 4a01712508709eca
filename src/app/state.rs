// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::Config;
use crate::station::{FormField, OcrTicket, ScanEvent, ScreenId, Station, StationEvent};
use cosmic::cosmic_config;

/// Simulated OCR run in flight on the tokio executor
///
/// Dropping or firing `cancel` stops the timer task before it delivers its
/// completion.
#[derive(Debug)]
pub struct PendingOcr {
    pub ticket: OcrTicket,
    pub cancel: Option<tokio::sync::oneshot::Sender<()>>,
}

impl PendingOcr {
    pub fn new(ticket: OcrTicket, cancel: tokio::sync::oneshot::Sender<()>) -> Self {
        Self {
            ticket,
            cancel: Some(cancel),
        }
    }

    /// Signal the timer task to stop (consumes the sender)
    pub fn cancel(&mut self) {
        if let Some(sender) = self.cancel.take() {
            // The task may already have finished
            let _ = sender.send(());
        }
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Kiosk model: widgets, scan state, navigation, toasts
    pub station: Station,
    /// OCR timer currently running, if any
    pub pending_ocr: Option<PendingOcr>,
    /// Labels for the theme dropdown
    pub theme_dropdown_options: Vec<String>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Station =====
    /// Forward an event to the station model
    Station(StationEvent),
    /// OCR timer for `ticket` elapsed
    OcrTimerElapsed(OcrTicket),

    // ===== Status bar =====
    /// Clock subscription produced a new label
    ClockTick(String),
    /// Connectivity probe result (`true` = LAN)
    NetworkProbed(bool),

    // ===== System =====
    /// Configuration changed on disk
    UpdateConfig(Config),
    /// Theme dropdown selection
    SetAppTheme(usize),
    /// No-op message for async tasks that don't need a response
    Noop,
}

impl Message {
    pub fn scan(event: ScanEvent) -> Self {
        Message::Station(StationEvent::Scan(event))
    }

    pub fn navigate(screen: ScreenId) -> Self {
        Message::Station(StationEvent::Navigate(screen))
    }

    pub fn field_edited(field: FormField, value: String) -> Self {
        Message::Station(StationEvent::FieldEdited(field, value))
    }
}
