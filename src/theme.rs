//! Minimal dark theme for the chat UI.

use egui::Color32;

use crate::status::ConnectionStatus;

/// Greyscale palette plus the three status accents.
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(10, 10, 10);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(20, 20, 20);
    pub const BG_HOVER: Color32 = Color32::from_rgb(32, 32, 32);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 90, 90);

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 40);

    // === Status accents (success / danger / warning) ===
    pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const STATUS_DANGER: Color32 = Color32::from_rgb(220, 90, 90);
    pub const STATUS_WARNING: Color32 = Color32::from_rgb(220, 180, 80);
}

/// Status accent chosen by the tag, never by the label text.
pub fn status_color(status: &ConnectionStatus) -> Color32 {
    match status {
        ConnectionStatus::Connected => colors::STATUS_SUCCESS,
        ConnectionStatus::Disconnected => colors::STATUS_DANGER,
        ConnectionStatus::Error(_) => colors::STATUS_WARNING,
        ConnectionStatus::Connecting => colors::TEXT_SECONDARY,
        ConnectionStatus::Idle => colors::TEXT_MUTED,
    }
}

/// Dark visuals with flat widgets and no shadows.
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = BG_PRIMARY;

    visuals.widgets.hovered.bg_fill = BG_ELEVATED;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.hovered.weak_bg_fill = BG_ELEVATED;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    visuals.selection.bg_fill = Color32::from_rgb(60, 60, 60);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.hyperlink_color = TEXT_PRIMARY;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
