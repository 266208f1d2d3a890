//! Header bar: connection form, open/close controls, status label.

use eframe::egui;

use crate::theme::{colors, status_color};
use super::ChatApp;

impl ChatApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Type").color(colors::TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut self.chat_type)
                    .desired_width(70.0)
                    .hint_text("group"),
            );

            ui.label(egui::RichText::new("Room").color(colors::TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut self.room)
                    .desired_width(110.0)
                    .hint_text("lobby"),
            );

            ui.label(egui::RichText::new("Name").color(colors::TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut self.username)
                    .desired_width(110.0)
                    .hint_text("username"),
            );

            ui.add_space(8.0);

            // Open stays disabled while a handle exists (connecting or open).
            let open = ui.add_enabled(!self.session.is_active(), egui::Button::new("Open"));
            if open.clicked() {
                self.open_connection();
            }

            let close = ui.add_enabled(self.session.is_active(), egui::Button::new("Close"));
            if close.clicked() {
                self.session.close();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = self.session.status();
                ui.colored_label(status_color(status), status.label().into_owned());
            });
        });
    }
}
