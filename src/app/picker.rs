//! Participant picker.
//!
//! ComboBox rows come from the pure formatters: placeholder entries render
//! as their bare label, user entries as an avatar badge plus the name. The
//! collapsed view is always text only.

use eframe::egui;

use crate::participants::{format_result, format_selection, Participant, PickerRow};
use crate::theme::colors;
use super::ChatApp;

const PLACEHOLDER_LABEL: &str = "Select participant...";

impl ChatApp {
    pub(crate) fn render_picker(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("participants")
            .default_width(220.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Participants").color(colors::TEXT_MUTED));
                ui.add_space(4.0);

                let placeholder = Participant::placeholder(PLACEHOLDER_LABEL);
                let selected_text = match self
                    .selected_participant
                    .and_then(|i| self.roster.get(i))
                {
                    Some(user) => format_selection(user),
                    None => format_selection(&placeholder),
                };

                let mut clicked: Option<Option<usize>> = None;
                egui::ComboBox::from_id_salt("participants_picker")
                    .width(ui.available_width())
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        if let PickerRow::Placeholder(label) = format_result(&placeholder) {
                            if ui
                                .selectable_label(self.selected_participant.is_none(), label)
                                .clicked()
                            {
                                clicked = Some(None);
                            }
                        }

                        for (i, user) in self.roster.iter().enumerate() {
                            let row_selected = self.selected_participant == Some(i);
                            match format_result(user) {
                                PickerRow::Placeholder(label) => {
                                    if ui.selectable_label(row_selected, label).clicked() {
                                        clicked = Some(Some(i));
                                    }
                                }
                                PickerRow::User { avatar, label } => {
                                    if avatar_row(ui, row_selected, &avatar, &label).clicked() {
                                        clicked = Some(Some(i));
                                    }
                                }
                            }
                        }
                    });

                if let Some(selection) = clicked {
                    self.selected_participant = selection;
                }
            });
    }
}

/// One dropdown row: round avatar badge, then the selectable name. The
/// avatar path shows on hover.
fn avatar_row(ui: &mut egui::Ui, selected: bool, avatar: &str, label: &str) -> egui::Response {
    let response = ui
        .horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), 9.0, badge_color(avatar));
            let initial = label.chars().next().unwrap_or('?');
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initial,
                egui::FontId::proportional(11.0),
                colors::BG_PRIMARY,
            );
            ui.selectable_label(selected, label)
        })
        .inner;
    response.on_hover_text(avatar)
}

/// Deterministic badge tint derived from the avatar path.
fn badge_color(avatar: &str) -> egui::Color32 {
    const PALETTE: [egui::Color32; 6] = [
        egui::Color32::from_rgb(120, 160, 220),
        egui::Color32::from_rgb(220, 150, 110),
        egui::Color32::from_rgb(140, 200, 140),
        egui::Color32::from_rgb(200, 130, 180),
        egui::Color32::from_rgb(180, 180, 120),
        egui::Color32::from_rgb(130, 190, 200),
    ];
    let idx = avatar
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(b as usize))
        % PALETTE.len();
    PALETTE[idx]
}
