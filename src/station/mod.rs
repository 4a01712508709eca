// SPDX-License-Identifier: GPL-3.0-only

//! Scan station core
//!
//! Toolkit-independent model of the kiosk: a retained widget tree, the
//! capture/OCR state machine that drives it, panel navigation, status chips,
//! toasts and the manual entry form. Hosts (desktop, terminal, simulator)
//! feed [`StationEvent`]s into [`Station::dispatch`] and carry out the
//! returned [`Effect`]s; they draw whatever the [`WidgetRegistry`] holds.

pub mod builder;
pub mod driver;
pub mod form;
pub mod machine;
pub mod navigation;
pub mod record;
pub mod status;
pub mod styles;
pub mod toast;
pub mod widgets;

pub use builder::{Branding, StationRefs, Surface};
pub use driver::HeadlessDriver;
pub use form::{FormField, ManualEntry};
pub use machine::{OcrTicket, ScanEvent, ScanState, TimerEffect};
pub use navigation::ScreenId;
pub use styles::{StyleRegistry, Tone};
pub use widgets::{WidgetId, WidgetRegistry};

use crate::constants::{DEFAULT_BRIGHTNESS, text, timing};
use crate::errors::ValidationError;
use machine::CaptureMachine;
use navigation::Navigator;
use serde::Serialize;
use std::time::{Duration, Instant};
use toast::{ToastQueue, ToastView};
use tracing::{debug, info, warn};

/// Tunables applied on top of the fixed layout
#[derive(Debug, Clone, PartialEq)]
pub struct StationSettings {
    pub ocr_delay: Duration,
    pub toast_lifetime: Duration,
    pub brightness: u8,
    pub branding: Branding,
}

impl Default for StationSettings {
    fn default() -> Self {
        Self {
            ocr_delay: timing::OCR_DELAY,
            toast_lifetime: timing::TOAST_LIFETIME,
            brightness: DEFAULT_BRIGHTNESS,
            branding: Branding::default(),
        }
    }
}

/// Everything that can happen to the station
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationEvent {
    Scan(ScanEvent),
    Navigate(ScreenId),
    /// `true` when the host is on the LAN
    NetworkStatus(bool),
    Clock(String),
    FieldEdited(FormField, String),
    SubmitForm,
    BrightnessChanged(u8),
    RestartRequested,
    ExpireToasts,
}

/// Work the host has to carry out after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Timer(TimerEffect),
    /// Send [`StationEvent::ExpireToasts`] after the given delay
    ExpireToastsAfter(Duration),
}

/// The kiosk model
#[derive(Debug, Clone)]
pub struct Station {
    surface: Surface,
    styles: StyleRegistry,
    registry: WidgetRegistry,
    refs: StationRefs,
    machine: CaptureMachine,
    navigator: Navigator,
    toasts: ToastQueue,
    brightness: u8,
}

impl Station {
    /// Build the layout on `surface` with default settings
    pub fn initialize(surface: Surface) -> Self {
        Self::with_settings(surface, StationSettings::default())
    }

    /// Build the layout on `surface` and render the initial idle state
    pub fn with_settings(surface: Surface, settings: StationSettings) -> Self {
        let mut registry = WidgetRegistry::new();
        let refs = builder::build(&surface, &settings.branding, &mut registry);

        let mut station = Self {
            surface,
            styles: StyleRegistry::standard(),
            registry,
            refs,
            machine: CaptureMachine::new(settings.ocr_delay),
            navigator: Navigator::new(),
            toasts: ToastQueue::new(settings.toast_lifetime),
            brightness: settings.brightness,
        };
        station.set_brightness(settings.brightness);
        station.render();

        info!(
            widgets = station.registry.len(),
            width = surface.width,
            height = surface.height,
            "Station initialized"
        );
        station
    }

    /// Apply changed settings without rebuilding the layout
    pub fn apply_settings(&mut self, settings: &StationSettings) {
        self.machine.set_ocr_delay(settings.ocr_delay);
        self.toasts.set_lifetime(settings.toast_lifetime);
        self.set_brightness(settings.brightness);

        let top = self.refs.top_bar;
        self.registry
            .set_text(top.mission_title, settings.branding.mission_title.as_str());
        self.registry
            .set_text(top.station_title, settings.branding.station_title.as_str());
    }

    /// Apply one event and return the host work it requires
    pub fn dispatch(&mut self, event: StationEvent, now: Instant) -> Vec<Effect> {
        debug!(?event, "Dispatching station event");

        match event {
            StationEvent::Scan(event) => self.handle_scan(event),
            StationEvent::Navigate(screen) => {
                self.navigate(screen);
                Vec::new()
            }
            StationEvent::NetworkStatus(is_lan) => {
                self.set_network_status(is_lan);
                Vec::new()
            }
            StationEvent::Clock(time) => {
                self.set_clock(&time);
                Vec::new()
            }
            StationEvent::FieldEdited(field, value) => {
                self.set_form_field(field, value);
                Vec::new()
            }
            StationEvent::SubmitForm => {
                let (result, effects) = self.submit_form(now);
                if let Err(err) = result {
                    debug!(%err, "Manual entry rejected");
                }
                effects
            }
            StationEvent::BrightnessChanged(value) => {
                self.set_brightness(value);
                Vec::new()
            }
            StationEvent::RestartRequested => {
                info!("Restart requested");
                vec![self.show_toast(text::TOAST_RESTARTING, now)]
            }
            StationEvent::ExpireToasts => {
                let removed = self.expire_toasts(now);
                if removed > 0 {
                    debug!(removed, "Toasts expired");
                }
                Vec::new()
            }
        }
    }

    fn handle_scan(&mut self, event: ScanEvent) -> Vec<Effect> {
        let transition = self.machine.handle(event);
        self.render();
        transition.effect.map(Effect::Timer).into_iter().collect()
    }

    /// Redraw the scan UI from the current state
    pub fn render(&mut self) {
        machine::render(self.machine.state(), &self.refs.scan, &mut self.registry);
    }

    pub fn navigate(&mut self, screen: ScreenId) {
        self.navigator
            .navigate(screen, &self.refs.panels, &mut self.registry);
    }

    pub fn set_network_status(&mut self, is_lan: bool) {
        status::set_network_status(&mut self.registry, self.refs.top_bar.chip_net, is_lan);
    }

    pub fn set_clock(&mut self, time: &str) {
        status::set_clock(&mut self.registry, self.refs.top_bar.clock, time);
    }

    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value.min(100);
        self.registry
            .set_value(self.refs.settings.brightness, i32::from(self.brightness));
    }

    /// Store `value` in the entry widget for `field`
    pub fn set_form_field(&mut self, field: FormField, value: impl Into<String>) {
        self.registry.set_text(self.refs.form.entry(field), value);
    }

    /// Current form contents, read back from the entry widgets
    pub fn manual_entry(&self) -> ManualEntry {
        let mut entry = ManualEntry::default();
        for field in FormField::ALL {
            entry.set(field, self.registry.text(self.refs.form.entry(field)));
        }
        entry
    }

    /// Validate the form and move the scan state accordingly
    pub fn submit_form(
        &mut self,
        now: Instant,
    ) -> (Result<ManualEntry, ValidationError>, Vec<Effect>) {
        let entry = self.manual_entry();

        match entry.validate() {
            Ok(()) => {
                info!(last_name = %entry.last_name, "Manual entry accepted");
                self.registry.set_text(self.refs.form.error, "");
                let mut effects = self.handle_scan(ScanEvent::ValidationPassed);
                effects.push(self.show_toast(text::TOAST_RECORD_SAVED, now));
                (Ok(entry), effects)
            }
            Err(err) => {
                warn!(%err, "Manual entry failed validation");
                self.registry.set_text(self.refs.form.error, err.to_string());
                let effects = self.handle_scan(ScanEvent::ValidationFailed);
                (Err(err), effects)
            }
        }
    }

    /// Queue a toast and return the sweep the host must schedule
    pub fn show_toast(&mut self, message: &str, now: Instant) -> Effect {
        self.toasts.push(message, now);
        Effect::ExpireToastsAfter(self.toasts.lifetime())
    }

    pub fn expire_toasts(&mut self, now: Instant) -> usize {
        self.toasts.expire(now)
    }

    pub fn state(&self) -> ScanState {
        self.machine.state()
    }

    pub fn pending_ocr(&self) -> Option<OcrTicket> {
        self.machine.pending()
    }

    pub fn screen(&self) -> ScreenId {
        self.navigator.current()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn refs(&self) -> &StationRefs {
        &self.refs
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Capture what is currently on screen
    pub fn snapshot(&self, now: Instant) -> StationSnapshot {
        let registry = &self.registry;
        let scan = &self.refs.scan;
        let chip = |id| ChipSnapshot {
            text: registry.text(id).to_string(),
            tone: registry.tone(id),
        };

        StationSnapshot {
            state: self.state(),
            screen: self.screen(),
            chips: Chips {
                camera: chip(scan.chip_cam),
                ocr: chip(scan.chip_ocr),
                network: chip(self.refs.top_bar.chip_net),
            },
            clock: registry.text(self.refs.top_bar.clock).to_string(),
            controls: Controls {
                camera_switch: registry.is_checked(scan.camera_switch),
                capture_enabled: registry.is_enabled(scan.capture_button),
                retake_enabled: registry.is_enabled(scan.retake_button),
                clear_enabled: registry.is_enabled(scan.clear_button),
                spinner_visible: registry.is_visible(scan.spinner),
                overlay_visible: registry.is_visible(scan.overlay),
            },
            result: ResultSnapshot {
                name: registry.text(scan.result_name).to_string(),
                id_number: registry.text(scan.result_id).to_string(),
                date_of_birth: registry.text(scan.result_dob).to_string(),
                sex: registry.text(scan.result_sex).to_string(),
                confidence: registry.value(scan.confidence_bar),
                confidence_label: registry.text(scan.confidence_label).to_string(),
            },
            form: self.manual_entry(),
            form_error: registry
                .is_visible(self.refs.form.error)
                .then(|| registry.text(self.refs.form.error).to_string()),
            brightness: self.brightness,
            pending_ocr: self.pending_ocr().map(OcrTicket::id),
            toasts: self.toasts.views(now),
        }
    }
}

/// Chip text and tone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipSnapshot {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chips {
    pub camera: ChipSnapshot,
    pub ocr: ChipSnapshot,
    pub network: ChipSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub camera_switch: bool,
    pub capture_enabled: bool,
    pub retake_enabled: bool,
    pub clear_enabled: bool,
    pub spinner_visible: bool,
    pub overlay_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSnapshot {
    pub name: String,
    pub id_number: String,
    pub date_of_birth: String,
    pub sex: String,
    pub confidence: i32,
    pub confidence_label: String,
}

/// Serializable picture of the station, as printed by `simulate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSnapshot {
    pub state: ScanState,
    pub screen: ScreenId,
    pub chips: Chips,
    pub clock: String,
    pub controls: Controls,
    pub result: ResultSnapshot,
    pub form: ManualEntry,
    pub form_error: Option<String>,
    pub brightness: u8,
    pub pending_ocr: Option<u64>,
    pub toasts: Vec<ToastView>,
}
