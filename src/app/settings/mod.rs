// SPDX-License-Identifier: GPL-3.0-only

//! Settings panel module
//!
//! Device card (brightness, restart) and station card (theme, version).

pub mod view;
