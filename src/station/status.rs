// SPDX-License-Identifier: GPL-3.0-only

//! Top bar status updaters

use crate::constants::text;
use crate::station::styles::Tone;
use crate::station::widgets::{WidgetId, WidgetRegistry};

/// Show LAN/offline on the network chip
pub fn set_network_status(registry: &mut WidgetRegistry, chip: WidgetId, is_lan: bool) {
    let (label, tone) = if is_lan {
        (text::NET_LAN, Tone::Info)
    } else {
        (text::NET_OFFLINE, Tone::Alert)
    };
    registry.set_text(chip, label);
    registry.set_tone(chip, tone);
}

/// Overwrite the clock label verbatim
pub fn set_clock(registry: &mut WidgetRegistry, clock: WidgetId, time: &str) {
    registry.set_text(clock, time);
}
