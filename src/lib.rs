// SPDX-License-Identifier: GPL-3.0-only

//! Scan Station - an ID scanning kiosk for medical missions
//!
//! A fixed 1024x600 touch screen with a capture/OCR workflow, manual entry
//! form and device settings.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`station`]: Toolkit-independent station model (widgets, capture state
//!   machine, navigation, status bar, toasts, headless driver)
//! - [`app`]: libcosmic desktop front end
//! - [`terminal`]: ratatui front end
//! - [`cli`]: Scripted simulation
//! - [`config`]: User configuration handling
//! - [`network_manager`]: Link state from NetworkManager
//!
//! # Example
//!
//! ```
//! use scan_station::station::{ScanEvent, ScanState, Station, StationEvent, Surface};
//! use std::time::Instant;
//!
//! let mut station = Station::initialize(Surface::default());
//! station.dispatch(StationEvent::Scan(ScanEvent::CameraToggleOn), Instant::now());
//! assert_eq!(station.state(), ScanState::CameraReady);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod network_manager;
pub mod station;
pub mod terminal;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::Config;
pub use errors::{AppError, AppResult, ScriptError, ValidationError};
pub use station::{HeadlessDriver, ScanEvent, ScanState, Station, StationEvent};
