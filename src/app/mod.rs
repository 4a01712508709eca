// SPDX-License-Identifier: GPL-3.0-only

//! Desktop kiosk application
//!
//! A libcosmic front end over the [`Station`](crate::station::Station) model.
//! The view is a projection of the station's widget registry; every widget
//! callback becomes a [`StationEvent`](crate::station::StationEvent).
//!
//! # Architecture
//!
//! - `state`: AppModel, Message and the pending OCR timer
//! - `update`: Message routing
//! - `handlers`: Station events, timers, config and status feeds
//! - `view`: Main view composition (top bar, panels, toasts)
//! - `camera_preview`: Preview placeholder, overlay and spinner
//! - `controls`: Control card and results card
//! - `bottom_bar`: Panel navigation
//! - `fields_panel`: Manual entry form
//! - `settings`: Settings panel
//! - `style`: Station style to iced style conversion

mod bottom_bar;
mod camera_preview;
mod controls;
mod fields_panel;
mod handlers;
mod settings;
mod state;
mod style;
mod update;
mod view;

pub use state::{AppModel, Message, PendingOcr};

use crate::config::{AppTheme, Config};
use crate::constants::timing;
use crate::network_manager;
use crate::station::Station;
use cosmic::iced::Subscription;
use cosmic::{Element, Task};
use std::time::Duration;
use tracing::{info, warn};

/// Redraw interval while a toast is fading in
const TOAST_FRAME: Duration = Duration::from_millis(50);

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.medmission.ScanStation";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        mut core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Kiosk: no header bar
        core.window.show_headerbar = false;

        // Load configuration
        let (config_handler, config) = Config::load(Self::APP_ID);

        let station = Station::with_settings(config.layout.surface(), config.station_settings());
        let app_theme = config.app_theme;

        let app = AppModel {
            core,
            config,
            config_handler,
            station,
            pending_ocr: None,
            theme_dropdown_options: AppTheme::ALL
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
        };

        info!(
            width = app.station.surface().width,
            height = app.station.surface().height,
            "Scan station started"
        );

        (app, cosmic::command::set_theme(app_theme.theme()))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        use cosmic::iced::futures::SinkExt;

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Clock restarts whenever the format changes
        let clock_config = self.config.clone();
        let clock_sub = Subscription::run_with_id(
            ("clock", self.config.clock_format.clone()),
            cosmic::iced::stream::channel(1, move |mut output| async move {
                let mut last = String::new();
                loop {
                    let label = clock_config.format_clock(&chrono::Local::now());
                    if label != last {
                        if output.send(Message::ClockTick(label.clone())).await.is_err() {
                            info!("Clock subscription closed");
                            break;
                        }
                        last = label;
                    }
                    tokio::time::sleep(timing::CLOCK_TICK).await;
                }
            }),
        );

        let network_sub = Subscription::run_with_id(
            "network",
            cosmic::iced::stream::channel(1, |mut output| async move {
                let mut last = None;
                let mut monitor = None;
                loop {
                    let is_lan = match network_manager::poll(&mut monitor).await {
                        Ok(is_lan) => is_lan,
                        Err(err) => {
                            warn!(%err, "Connectivity probe failed, reporting offline");
                            false
                        }
                    };
                    if last != Some(is_lan) {
                        if output.send(Message::NetworkProbed(is_lan)).await.is_err() {
                            info!("Network subscription closed");
                            break;
                        }
                        last = Some(is_lan);
                    }
                    tokio::time::sleep(timing::NETWORK_POLL_INTERVAL).await;
                }
            }),
        );

        let mut subscriptions = vec![config_sub, clock_sub, network_sub];
        if !self.station.toasts().is_empty() {
            subscriptions.push(cosmic::iced::time::every(TOAST_FRAME).map(|_| Message::Noop));
        }

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
