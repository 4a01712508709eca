// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Handles configuration updates, theme selection, and the clock and
//! connectivity feeds for the top bar.

use crate::app::state::{AppModel, Message};
use crate::config::AppTheme;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{debug, error, info};

impl AppModel {
    // =========================================================================
    // Settings Handlers
    // =========================================================================

    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        let theme_changed = config.app_theme != self.config.app_theme;
        self.station.apply_settings(&config.station_settings());
        self.config = config;

        if theme_changed {
            cosmic::command::set_theme(self.config.app_theme.theme())
        } else {
            Task::none()
        }
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(app_theme) = AppTheme::ALL.get(index).copied() else {
            return Task::none();
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save app theme setting");
        }

        cosmic::command::set_theme(app_theme.theme())
    }

    /// Remember the brightness slider position across restarts
    pub(crate) fn save_brightness(&mut self, value: u8) {
        let value = value.min(100);
        if self.config.display_brightness == value {
            return;
        }
        self.config.display_brightness = value;

        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save display brightness");
        }
    }

    // =========================================================================
    // Status Bar Handlers
    // =========================================================================

    pub(crate) fn handle_clock_tick(&mut self, time: String) -> Task<cosmic::Action<Message>> {
        self.station.set_clock(&time);
        Task::none()
    }

    pub(crate) fn handle_network_probed(&mut self, is_lan: bool) -> Task<cosmic::Action<Message>> {
        debug!(is_lan, "Connectivity updated");
        self.station.set_network_status(is_lan);
        Task::none()
    }
}
