// SPDX-License-Identifier: GPL-3.0-only

//! Retained widget registry
//!
//! Widgets live in a single arena owned by the station. Every other
//! component refers to them through a [`WidgetId`], so a handle can never
//! outlive or alias the widget it names. Setters on unknown IDs are logged
//! and ignored; getters fall back to neutral values.

use crate::station::styles::{StyleName, Tone};
use serde::Serialize;
use tracing::warn;

/// Stable index of a widget in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WidgetId(u32);

impl WidgetId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a widget is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Root surface
    Root,
    /// Plain layout container
    Container,
    /// Styled card
    Card,
    /// Top-level content panel
    Panel,
    Label,
    /// Coloured status badge
    Chip,
    Button,
    Switch,
    /// Progress/confidence bar
    Bar,
    Spinner,
    /// Transparent layer drawn over the camera preview
    Overlay,
    /// Highlight rectangle inside the overlay
    DetectionBox,
    /// One-line text entry
    TextEntry,
    Slider,
    /// Solid block standing in for an image
    Placeholder,
}

/// Fixed size hint in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A retained widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub kind: WidgetKind,
    /// Accessible name for widgets whose caption lives elsewhere
    pub name: Option<String>,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
    pub style: Option<StyleName>,
    pub text: String,
    /// Chip tone; `None` means the style's default
    pub tone: Option<Tone>,
    pub visible: bool,
    pub enabled: bool,
    pub checked: bool,
    pub value: i32,
    pub range: (i32, i32),
    pub size: Option<Size>,
    /// Offset inside the parent for absolutely positioned widgets
    pub position: Option<(f32, f32)>,
}

impl Widget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            name: None,
            parent: None,
            children: Vec::new(),
            style: None,
            text: String::new(),
            tone: None,
            visible: true,
            enabled: true,
            checked: false,
            value: 0,
            range: (0, 100),
            size: None,
            position: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn style(mut self, style: StyleName) -> Self {
        self.style = Some(style);
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size { width, height });
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.range = (min, max);
        self.value = self.value.clamp(min, max);
        self
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = value.clamp(self.range.0, self.range.1);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Arena of widgets indexed by [`WidgetId`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WidgetRegistry {
    widgets: Vec<Widget>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget under `parent` and return its ID
    pub fn insert(&mut self, parent: Option<WidgetId>, mut widget: Widget) -> WidgetId {
        let id = WidgetId(self.widgets.len() as u32);
        widget.parent = parent;
        self.widgets.push(widget);

        if let Some(parent) = parent {
            match self.widgets.get_mut(parent.index()) {
                Some(p) => p.children.push(id),
                None => warn!(?parent, ?id, "Parent widget not found, widget left detached"),
            }
        }

        id
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id.index())
    }

    fn with_widget(&mut self, id: WidgetId, op: &str, f: impl FnOnce(&mut Widget)) {
        match self.widgets.get_mut(id.index()) {
            Some(widget) => f(widget),
            None => warn!(?id, op, "Ignoring update for unknown widget"),
        }
    }

    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) {
        let text = text.into();
        self.with_widget(id, "set_text", |w| w.text = text);
    }

    pub fn set_tone(&mut self, id: WidgetId, tone: Tone) {
        self.with_widget(id, "set_tone", |w| w.tone = Some(tone));
    }

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.with_widget(id, "set_visible", |w| w.visible = visible);
    }

    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        self.with_widget(id, "set_enabled", |w| w.enabled = enabled);
    }

    pub fn set_checked(&mut self, id: WidgetId, checked: bool) {
        self.with_widget(id, "set_checked", |w| w.checked = checked);
    }

    /// Set a bar/slider value, clamped to the widget's range
    pub fn set_value(&mut self, id: WidgetId, value: i32) {
        self.with_widget(id, "set_value", |w| {
            w.value = value.clamp(w.range.0, w.range.1);
        });
    }

    pub fn text(&self, id: WidgetId) -> &str {
        self.get(id).map(|w| w.text.as_str()).unwrap_or_default()
    }

    pub fn tone(&self, id: WidgetId) -> Tone {
        self.get(id).and_then(|w| w.tone).unwrap_or_default()
    }

    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.get(id).is_some_and(|w| w.visible)
    }

    pub fn is_enabled(&self, id: WidgetId) -> bool {
        self.get(id).is_some_and(|w| w.enabled)
    }

    pub fn is_checked(&self, id: WidgetId) -> bool {
        self.get(id).is_some_and(|w| w.checked)
    }

    pub fn value(&self, id: WidgetId) -> i32 {
        self.get(id).map(|w| w.value).unwrap_or_default()
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.get(id).map(|w| w.children.as_slice()).unwrap_or_default()
    }
}
