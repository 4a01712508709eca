// SPDX-License-Identifier: GPL-3.0-only

//! Scan controls module
//!
//! - Control card: camera-ready switch, capture, retake and clear
//! - Results card: extracted fields and confidence bar

pub mod capture_button;
pub mod results_card;
