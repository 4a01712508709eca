// SPDX-License-Identifier: GPL-3.0-only

//! Panel navigation
//!
//! Exactly one of the three content panels is visible at a time.

use crate::station::widgets::{WidgetId, WidgetRegistry};
use serde::Serialize;
use tracing::debug;

/// Top-level content panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    #[default]
    Scan,
    Fields,
    Settings,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [ScreenId::Scan, ScreenId::Fields, ScreenId::Settings];

    /// Navigation button caption
    pub fn label(self) -> &'static str {
        match self {
            ScreenId::Scan => "SCAN",
            ScreenId::Fields => "FIELDS",
            ScreenId::Settings => "SETTINGS",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a lowercase panel name (`scan`, `fields`, `settings`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.label().eq_ignore_ascii_case(name))
    }
}

/// Panel and nav-button handles, indexed by [`ScreenId::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelRefs {
    pub panels: [WidgetId; 3],
    pub nav_buttons: [WidgetId; 3],
}

impl PanelRefs {
    pub fn panel(&self, screen: ScreenId) -> WidgetId {
        self.panels[screen.index()]
    }

    pub fn nav_button(&self, screen: ScreenId) -> WidgetId {
        self.nav_buttons[screen.index()]
    }
}

/// Tracks which panel is on screen
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: ScreenId,
}

impl Navigator {
    /// Start on the scan panel
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Hide the current panel, reveal `target` and remember it
    ///
    /// Navigating to the current panel repeats the hide/show with no
    /// observable difference.
    pub fn navigate(&mut self, target: ScreenId, refs: &PanelRefs, registry: &mut WidgetRegistry) {
        debug!(from = ?self.current, to = ?target, "Navigating");

        registry.set_visible(refs.panel(self.current), false);
        registry.set_checked(refs.nav_button(self.current), false);

        registry.set_visible(refs.panel(target), true);
        registry.set_checked(refs.nav_button(target), true);

        self.current = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ScreenId::from_name("fields"), Some(ScreenId::Fields));
        assert_eq!(ScreenId::from_name("SETTINGS"), Some(ScreenId::Settings));
        assert_eq!(ScreenId::from_name("gallery"), None);
    }
}
