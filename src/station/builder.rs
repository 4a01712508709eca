// SPDX-License-Identifier: GPL-3.0-only

//! Screen builder
//!
//! Builds the station's fixed widget tree exactly once and hands back the
//! typed handles the state machine, navigator and status updaters need.
//!
//! Layout:
//! - top bar: mission/station titles, CAM/OCR/NET chips, clock
//! - three stacked panels (scan, fields, settings), only scan visible
//! - bottom navigation bar with one button per panel

use crate::constants::{DEFAULT_BRIGHTNESS, layout, text};
use crate::station::form::FormField;
use crate::station::navigation::{PanelRefs, ScreenId};
use crate::station::styles::{StyleName, Tone};
use crate::station::widgets::{Widget, WidgetId, WidgetKind, WidgetRegistry};
use serde::{Deserialize, Serialize};

/// Root surface the station is built on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub top_bar_height: f32,
    pub nav_bar_height: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: layout::SCREEN_WIDTH,
            height: layout::SCREEN_HEIGHT,
            top_bar_height: layout::TOP_BAR_HEIGHT,
            nav_bar_height: layout::NAV_BAR_HEIGHT,
        }
    }
}

impl Surface {
    /// Height left for the content panels between the two bars
    pub fn panel_height(&self) -> f32 {
        (self.height - self.top_bar_height - self.nav_bar_height).max(0.0)
    }
}

/// Captions that vary per deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub mission_title: String,
    pub station_title: String,
    pub version: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            mission_title: text::MISSION_TITLE.to_string(),
            station_title: text::STATION_TITLE.to_string(),
            version: crate::constants::app_info::version().to_string(),
        }
    }
}

/// Top bar handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopBarRefs {
    pub bar: WidgetId,
    pub mission_title: WidgetId,
    pub station_title: WidgetId,
    pub chip_net: WidgetId,
    pub clock: WidgetId,
}

/// Handles written by the capture state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanRefs {
    pub chip_cam: WidgetId,
    pub chip_ocr: WidgetId,
    /// Caption drawn on the preview placeholder
    pub preview_label: WidgetId,
    pub camera_switch: WidgetId,
    pub capture_button: WidgetId,
    pub retake_button: WidgetId,
    pub clear_button: WidgetId,
    pub spinner: WidgetId,
    pub overlay: WidgetId,
    pub detection_boxes: [WidgetId; layout::DETECTION_BOX_COUNT],
    pub result_name: WidgetId,
    pub result_id: WidgetId,
    pub result_dob: WidgetId,
    pub result_sex: WidgetId,
    pub confidence_bar: WidgetId,
    pub confidence_label: WidgetId,
    pub form_error: WidgetId,
}

/// Manual entry form handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormRefs {
    /// Text entries indexed by [`FormField::index`]
    pub entries: [WidgetId; 4],
    pub submit: WidgetId,
    pub error: WidgetId,
    pub image_placeholder: WidgetId,
}

impl FormRefs {
    pub fn entry(&self, field: FormField) -> WidgetId {
        self.entries[field.index()]
    }
}

/// Settings panel handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsRefs {
    pub brightness: WidgetId,
    pub restart: WidgetId,
    pub version: WidgetId,
}

/// Every handle exposed by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StationRefs {
    pub root: WidgetId,
    pub top_bar: TopBarRefs,
    pub nav_bar: WidgetId,
    pub panels: PanelRefs,
    pub scan: ScanRefs,
    pub form: FormRefs,
    pub settings: SettingsRefs,
}

/// Build the fixed layout into `registry`
pub fn build(surface: &Surface, branding: &Branding, registry: &mut WidgetRegistry) -> StationRefs {
    let root = registry.insert(
        None,
        Widget::new(WidgetKind::Root)
            .style(StyleName::AppBackground)
            .size(surface.width, surface.height),
    );

    let (top_bar, chip_cam, chip_ocr) = build_top_bar(root, surface, branding, registry);

    let nav_bar = registry.insert(
        Some(root),
        Widget::new(WidgetKind::Container).size(surface.width, surface.nav_bar_height),
    );

    let panel_height = surface.panel_height();
    let panels = ScreenId::ALL.map(|screen| {
        let panel = Widget::new(WidgetKind::Panel)
            .text(screen.label())
            .size(surface.width, panel_height)
            .position(0.0, surface.top_bar_height);
        let panel = if screen == ScreenId::Scan {
            panel
        } else {
            panel.hidden()
        };
        registry.insert(Some(root), panel)
    });

    let nav_buttons = ScreenId::ALL.map(|screen| {
        let button = Widget::new(WidgetKind::Button)
            .text(screen.label())
            .size(layout::NAV_BUTTON_WIDTH, layout::NAV_BUTTON_HEIGHT);
        let id = registry.insert(Some(nav_bar), button);
        registry.set_checked(id, screen == ScreenId::Scan);
        id
    });

    let panels = PanelRefs {
        panels,
        nav_buttons,
    };

    let (form, form_error) = build_fields_panel(panels.panel(ScreenId::Fields), registry);
    let scan = build_scan_panel(
        panels.panel(ScreenId::Scan),
        chip_cam,
        chip_ocr,
        form_error,
        registry,
    );
    let settings = build_settings_panel(panels.panel(ScreenId::Settings), branding, registry);

    StationRefs {
        root,
        top_bar,
        nav_bar,
        panels,
        scan,
        form,
        settings,
    }
}

fn build_top_bar(
    root: WidgetId,
    surface: &Surface,
    branding: &Branding,
    registry: &mut WidgetRegistry,
) -> (TopBarRefs, WidgetId, WidgetId) {
    let bar = registry.insert(
        Some(root),
        Widget::new(WidgetKind::Container)
            .style(StyleName::TopBar)
            .size(surface.width, surface.top_bar_height),
    );

    let mission_title = registry.insert(
        Some(bar),
        Widget::new(WidgetKind::Label).text(branding.mission_title.as_str()),
    );
    let station_title = registry.insert(
        Some(bar),
        Widget::new(WidgetKind::Label).text(branding.station_title.as_str()),
    );

    let chip = |text: &str| {
        Widget::new(WidgetKind::Chip)
            .style(StyleName::Chip)
            .tone(Tone::Neutral)
            .text(text)
    };
    let chip_cam = registry.insert(Some(bar), chip(text::CAM_IDLE));
    let chip_ocr = registry.insert(Some(bar), chip(text::OCR_IDLE));
    let chip_net = registry.insert(Some(bar), chip(text::NET_LAN));

    let clock = registry.insert(
        Some(bar),
        Widget::new(WidgetKind::Label).text(text::DEFAULT_CLOCK),
    );

    let refs = TopBarRefs {
        bar,
        mission_title,
        station_title,
        chip_net,
        clock,
    };
    (refs, chip_cam, chip_ocr)
}

fn build_scan_panel(
    panel: WidgetId,
    chip_cam: WidgetId,
    chip_ocr: WidgetId,
    form_error: WidgetId,
    registry: &mut WidgetRegistry,
) -> ScanRefs {
    // Left: camera preview
    let camera_card = registry.insert(
        Some(panel),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::CAMERA_CARD_WIDTH, layout::CAMERA_CARD_HEIGHT),
    );
    let preview = registry.insert(
        Some(camera_card),
        Widget::new(WidgetKind::Placeholder).size(layout::PREVIEW_WIDTH, layout::PREVIEW_HEIGHT),
    );
    let preview_label = registry.insert(
        Some(preview),
        Widget::new(WidgetKind::Label).text(text::CAMERA_PREVIEW),
    );

    let overlay = registry.insert(
        Some(preview),
        Widget::new(WidgetKind::Overlay)
            .size(layout::PREVIEW_WIDTH, layout::PREVIEW_HEIGHT)
            .hidden(),
    );
    let detection_boxes = std::array::from_fn(|i| {
        registry.insert(
            Some(overlay),
            Widget::new(WidgetKind::DetectionBox)
                .style(StyleName::DetectionBox)
                .size(layout::DETECTION_BOX_WIDTH, layout::DETECTION_BOX_HEIGHT)
                .position(
                    layout::DETECTION_BOX_X + i as f32 * layout::DETECTION_BOX_STRIDE,
                    layout::DETECTION_BOX_Y,
                ),
        )
    });

    let spinner = registry.insert(
        Some(preview),
        Widget::new(WidgetKind::Spinner)
            .size(layout::SPINNER_SIZE, layout::SPINNER_SIZE)
            .hidden(),
    );

    // Right: controls and results
    let column = registry.insert(
        Some(panel),
        Widget::new(WidgetKind::Container)
            .size(layout::CONTROL_COLUMN_WIDTH, layout::PANEL_CARD_HEIGHT),
    );
    let control_card = registry.insert(
        Some(column),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::CONTROL_CARD_WIDTH, layout::CONTROL_CARD_HEIGHT),
    );
    let camera_switch = registry.insert(
        Some(control_card),
        Widget::new(WidgetKind::Switch).text(text::READY_CAMERA),
    );
    let capture_button = registry.insert(
        Some(control_card),
        Widget::new(WidgetKind::Button)
            .style(StyleName::PrimaryButton)
            .text(text::CAPTURE)
            .disabled(),
    );
    let retake_button = registry.insert(
        Some(control_card),
        Widget::new(WidgetKind::Button)
            .text(text::RETAKE)
            .disabled(),
    );
    let clear_button = registry.insert(
        Some(control_card),
        Widget::new(WidgetKind::Button).text(text::CLEAR),
    );

    let results_card = registry.insert(
        Some(column),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::CONTROL_CARD_WIDTH, layout::RESULTS_CARD_HEIGHT),
    );
    let result_label = |registry: &mut WidgetRegistry, caption: &str| -> WidgetId {
        registry.insert(
            Some(results_card),
            Widget::new(WidgetKind::Label)
                .text(text::PLACEHOLDER)
                .named(caption),
        )
    };
    let result_name = result_label(registry, "Name");
    let result_id = result_label(registry, "ID No.");
    let result_dob = result_label(registry, "Birthdate");
    let result_sex = result_label(registry, "Sex");

    let confidence_bar = registry.insert(
        Some(results_card),
        Widget::new(WidgetKind::Bar)
            .range(0, 100)
            .value(0)
            .size(layout::CONFIDENCE_BAR_WIDTH, layout::CONFIDENCE_BAR_HEIGHT),
    );
    let confidence_label = registry.insert(
        Some(results_card),
        Widget::new(WidgetKind::Label).text("0%"),
    );

    ScanRefs {
        chip_cam,
        chip_ocr,
        preview_label,
        camera_switch,
        capture_button,
        retake_button,
        clear_button,
        spinner,
        overlay,
        detection_boxes,
        result_name,
        result_id,
        result_dob,
        result_sex,
        confidence_bar,
        confidence_label,
        form_error,
    }
}

fn build_fields_panel(panel: WidgetId, registry: &mut WidgetRegistry) -> (FormRefs, WidgetId) {
    let form_card = registry.insert(
        Some(panel),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::FORM_CARD_WIDTH, layout::PANEL_CARD_HEIGHT),
    );

    let entries = FormField::ALL.map(|field| {
        registry.insert(
            Some(form_card),
            Widget::new(WidgetKind::Label).text(field.label()),
        );
        registry.insert(
            Some(form_card),
            Widget::new(WidgetKind::TextEntry).named(field.label()),
        )
    });

    let submit = registry.insert(
        Some(form_card),
        Widget::new(WidgetKind::Button).text(text::SAVE_RECORD),
    );
    let error = registry.insert(
        Some(form_card),
        Widget::new(WidgetKind::Label).tone(Tone::Alert).hidden(),
    );

    let preview_card = registry.insert(
        Some(panel),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::FIELD_PREVIEW_WIDTH, layout::PANEL_CARD_HEIGHT),
    );
    let image_placeholder = registry.insert(
        Some(preview_card),
        Widget::new(WidgetKind::Placeholder)
            .tone(Tone::Neutral)
            .size(layout::FIELD_IMAGE_WIDTH, layout::FIELD_IMAGE_HEIGHT),
    );
    registry.insert(
        Some(image_placeholder),
        Widget::new(WidgetKind::Label).text(text::TAP_TO_ZOOM),
    );

    let refs = FormRefs {
        entries,
        submit,
        error,
        image_placeholder,
    };
    (refs, error)
}

fn build_settings_panel(
    panel: WidgetId,
    branding: &Branding,
    registry: &mut WidgetRegistry,
) -> SettingsRefs {
    let device_card = registry.insert(
        Some(panel),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::SETTINGS_CARD_WIDTH, layout::SETTINGS_CARD_HEIGHT)
            .text(text::DEVICE),
    );
    let brightness = registry.insert(
        Some(device_card),
        Widget::new(WidgetKind::Slider)
            .text(text::BRIGHTNESS)
            .range(0, 100)
            .value(DEFAULT_BRIGHTNESS as i32)
            .size(layout::BRIGHTNESS_SLIDER_WIDTH, 0.0),
    );
    let restart = registry.insert(
        Some(device_card),
        Widget::new(WidgetKind::Button).text(text::RESTART),
    );

    let station_card = registry.insert(
        Some(panel),
        Widget::new(WidgetKind::Card)
            .style(StyleName::Card)
            .size(layout::SETTINGS_CARD_WIDTH, layout::SETTINGS_CARD_HEIGHT)
            .text(text::STATION),
    );
    let version = registry.insert(
        Some(station_card),
        Widget::new(WidgetKind::Label).text(format!("Version {}", branding.version)),
    );

    SettingsRefs {
        brightness,
        restart,
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> (WidgetRegistry, StationRefs) {
        let mut registry = WidgetRegistry::new();
        let refs = build(&Surface::default(), &Branding::default(), &mut registry);
        (registry, refs)
    }

    #[test]
    fn test_only_scan_panel_visible_after_build() {
        let (registry, refs) = built();
        for screen in ScreenId::ALL {
            assert_eq!(
                registry.is_visible(refs.panels.panel(screen)),
                screen == ScreenId::Scan
            );
        }
    }

    #[test]
    fn test_panels_fill_space_between_bars() {
        let (registry, refs) = built();
        let panel = registry.get(refs.panels.panel(ScreenId::Scan)).unwrap();
        let size = panel.size.unwrap();
        assert_eq!(size.width, 1024.0);
        assert_eq!(size.height, 456.0);
        assert_eq!(panel.position, Some((0.0, 64.0)));
    }

    #[test]
    fn test_initial_top_bar_text() {
        let (registry, refs) = built();
        assert_eq!(registry.text(refs.scan.chip_cam), "CAM: IDLE");
        assert_eq!(registry.text(refs.scan.chip_ocr), "OCR: IDLE");
        assert_eq!(registry.text(refs.top_bar.chip_net), "NET: LAN");
        assert_eq!(registry.text(refs.top_bar.clock), "12:00");
    }

    #[test]
    fn test_detection_boxes_are_spaced() {
        let (registry, refs) = built();
        let xs: Vec<f32> = refs
            .scan
            .detection_boxes
            .iter()
            .filter_map(|id| registry.get(*id).and_then(|w| w.position))
            .map(|(x, _)| x)
            .collect();
        assert_eq!(xs, vec![50.0, 170.0, 290.0]);
    }

    #[test]
    fn test_preview_caption_and_overlay_children() {
        let (registry, refs) = built();
        assert_eq!(registry.text(refs.scan.preview_label), "CAMERA PREVIEW");
        assert_eq!(
            registry.children(refs.scan.overlay),
            refs.scan.detection_boxes.as_slice()
        );
        assert!(!registry.is_visible(refs.scan.overlay));
    }

    #[test]
    fn test_every_form_field_has_an_entry() {
        let (registry, refs) = built();
        for field in FormField::ALL {
            let entry = registry.get(refs.form.entry(field)).unwrap();
            assert_eq!(entry.kind, WidgetKind::TextEntry);
        }
    }
}
